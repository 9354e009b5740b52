// SPDX-License-Identifier: MPL-2.0
//! Overlay controls drawn over the video surface.
//!
//! Renders a header with the back button, the center play/pause glyph, and
//! a bottom toolbar with time labels, the timeline scrubber, and the mute
//! and fullscreen buttons. Everything shown comes from [`RenderDirectives`].

use crate::error::PlaybackError;
use crate::i18n::fluent::I18n;
use crate::overlay::{ControlIcon, FullscreenIcon, MuteIcon, RenderDirectives};
use crate::session::PlayerEvent;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use iced::widget::{
    button, center, column, container, mouse_area, progress_bar, row, slider, text, tooltip,
    Space, Text,
};
use iced::{Alignment, Background, Color, Element, Length};

/// Slider step as a fraction of the duration.
const SLIDER_STEP: f64 = 0.001;

/// Messages emitted by overlay widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Tap anywhere on the overlay outside a control.
    TapOverlay,
    TogglePlayback,
    /// Slider is being dragged (preview only).
    ScrubChanged(f64),
    /// Slider released; commit the previewed position.
    ScrubReleased,
    ToggleMute,
    ToggleFullscreen,
    Back,
}

/// View context for rendering the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Local widget state: the scrub position while the slider is held.
#[derive(Debug, Clone, Default)]
pub struct State {
    scrub_preview: Option<f64>,
}

impl State {
    /// Handle an overlay message, returning the session event it maps to.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Option<PlayerEvent> {
        match msg {
            Message::TapOverlay => Some(PlayerEvent::ToggleControls),
            Message::TogglePlayback => Some(PlayerEvent::TogglePlayback),
            Message::ScrubChanged(fraction) => {
                let started = self.scrub_preview.is_none();
                self.scrub_preview = Some(fraction);
                started.then_some(PlayerEvent::ScrubStarted)
            }
            Message::ScrubReleased => self.scrub_preview.take().map(PlayerEvent::ScrubReleased),
            Message::ToggleMute => Some(PlayerEvent::ToggleMute),
            Message::ToggleFullscreen => Some(PlayerEvent::ToggleFullscreen),
            Message::Back => Some(PlayerEvent::Back),
        }
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrub_preview.is_some()
    }

    /// Slider position: the preview while scrubbing, playback otherwise.
    pub fn slider_value(&self, directives: &RenderDirectives) -> f64 {
        self.scrub_preview
            .or(directives.slider_fraction)
            .unwrap_or_default()
    }
}

/// Renders the overlay for one set of directives.
pub fn view<'a>(
    ctx: ViewContext<'a>,
    state: &State,
    directives: &RenderDirectives,
) -> Element<'a, Message> {
    let size = directives.video_size;
    let surface = |content: Element<'a, Message>| {
        container(content)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
    };

    if !directives.overlay_shown {
        return surface(Space::new().into()).into();
    }

    let alpha = directives.opacity;
    let foreground = Color {
        a: alpha,
        ..palette::WHITE
    };

    let body: Element<'a, Message> = match &directives.error {
        Some(error) => error_view(ctx.i18n, error),
        None => column![
            header(ctx.i18n, directives, foreground),
            center(center_control(ctx.i18n, directives, foreground)),
            toolbar(ctx.i18n, state, directives, foreground),
        ]
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .into(),
    };

    let scrim = Color {
        a: opacity::SCRIM * alpha,
        ..palette::BLACK
    };
    let layer = surface(body).style(move |_theme| container::Style {
        background: Some(Background::Color(scrim)),
        text_color: Some(foreground),
        ..container::Style::default()
    });

    mouse_area(layer).on_press(Message::TapOverlay).into()
}

fn header<'a>(i18n: &I18n, directives: &RenderDirectives, color: Color) -> Element<'a, Message> {
    let back = control_button("←", color, sizing::ICON_MD, directives, Message::Back);
    row![
        with_tooltip(back, i18n.tr("tooltip-back")),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn center_control<'a>(
    i18n: &I18n,
    directives: &RenderDirectives,
    color: Color,
) -> Element<'a, Message> {
    let Some(icon) = directives.control_icon else {
        return Space::new().into();
    };
    let (glyph, tooltip_key) = match icon {
        ControlIcon::Loading => {
            return text(i18n.tr("label-loading"))
                .size(typography::BODY)
                .color(color)
                .into();
        }
        ControlIcon::Play => ("▶", "tooltip-play"),
        ControlIcon::Pause => ("⏸", "tooltip-pause"),
        ControlIcon::Replay => ("↻", "tooltip-replay"),
    };
    let button = control_button(glyph, color, sizing::ICON_XL, directives, Message::TogglePlayback);
    with_tooltip(button, i18n.tr(tooltip_key))
}

fn toolbar<'a>(
    i18n: &I18n,
    state: &State,
    directives: &RenderDirectives,
    color: Color,
) -> Element<'a, Message> {
    let mut bar = row![].spacing(spacing::XS).align_y(Alignment::Center);

    if let Some(elapsed) = &directives.elapsed_label {
        bar = bar.push(time_label(elapsed.clone(), color));
    }

    if directives.slider_fraction.is_some() {
        let value = state.slider_value(directives);
        let timeline: Element<'a, Message> = if directives.interactive {
            slider(0.0..=1.0, value, Message::ScrubChanged)
                .on_release(Message::ScrubReleased)
                .step(SLIDER_STEP)
                .width(Length::Fill)
                .into()
        } else {
            #[allow(clippy::cast_possible_truncation)] // fraction in [0, 1]
            progress_bar(0.0..=1.0, value as f32).into()
        };
        bar = bar.push(timeline);
    } else {
        bar = bar.push(Space::new().width(Length::Fill));
    }

    if let Some(total) = &directives.total_label {
        bar = bar.push(time_label(total.clone(), color));
    }

    if let Some(icon) = directives.mute_icon {
        let (glyph, key) = match icon {
            MuteIcon::VolumeUp => ("🔊", "tooltip-unmute"),
            MuteIcon::VolumeOff => ("🔇", "tooltip-mute"),
        };
        let button = control_button(glyph, color, sizing::ICON_SM, directives, Message::ToggleMute);
        bar = bar.push(with_tooltip(button, i18n.tr(key)));
    }

    if let Some(icon) = directives.fullscreen_icon {
        let (glyph, key) = match icon {
            FullscreenIcon::Enter => ("⛶", "tooltip-enter-fullscreen"),
            FullscreenIcon::Exit => ("⤡", "tooltip-exit-fullscreen"),
        };
        let button =
            control_button(glyph, color, sizing::ICON_SM, directives, Message::ToggleFullscreen);
        bar = bar.push(with_tooltip(button, i18n.tr(key)));
    }

    bar.into()
}

/// Errors stay fully opaque, even while the controls are faded out.
fn error_view<'a>(i18n: &I18n, error: &PlaybackError) -> Element<'a, Message> {
    center(
        text(i18n.tr_error(error))
            .size(typography::BODY)
            .color(palette::ERROR_500),
    )
    .into()
}

fn time_label<'a>(label: String, color: Color) -> Element<'a, Message> {
    text(label)
        .size(typography::CAPTION)
        .color(color)
        .width(Length::Fixed(sizing::TIME_LABEL_WIDTH))
        .into()
}

/// Button that only reacts once the controls are settled visible.
fn control_button<'a>(
    glyph: &'a str,
    color: Color,
    size: f32,
    directives: &RenderDirectives,
    message: Message,
) -> Element<'a, Message> {
    button(text(glyph).size(size).color(color))
        .on_press_maybe(directives.interactive.then_some(message))
        .padding(spacing::XXS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT.max(size + spacing::XS)))
        .style(|_theme, _status| button::Style {
            background: None,
            ..button::Style::default()
        })
        .into()
}

fn with_tooltip<'a>(content: Element<'a, Message>, label: String) -> Element<'a, Message> {
    tooltip(content, Text::new(label), tooltip::Position::Top)
        .gap(spacing::XXS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerOptions;
    use crate::overlay::{ControllerBuilder, FrameScheduler};
    use crate::test_utils::{assert_abs_diff_eq, RecordingMedia, F64_EPSILON};
    use crate::player::PlaybackStatus;
    use std::time::Duration;

    fn directives_for(options: PlayerOptions) -> RenderDirectives {
        let mut controller = ControllerBuilder::new(options)
            .mount(RecordingMedia::default(), FrameScheduler::new());
        controller.on_status_update(PlaybackStatus::loaded(2_500, 10_000));
        controller.request_toggle_controls();
        controller.advance_time(Duration::from_millis(300));
        controller.directives()
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let directives = directives_for(PlayerOptions {
            mute_visible: true,
            fullscreen_visible: true,
            ..PlayerOptions::default().with_source("clip.mp4")
        });
        let _element = view(ctx, &State::default(), &directives);
    }

    #[test]
    fn view_renders_error_and_looping() {
        let i18n = I18n::default();
        let failed = directives_for(PlayerOptions::default());
        let _error = view(ViewContext { i18n: &i18n }, &State::default(), &failed);

        let looping = directives_for(PlayerOptions {
            looping: true,
            ..PlayerOptions::default().with_source("clip.mp4")
        });
        assert!(!looping.overlay_shown);
        let _hidden = view(ViewContext { i18n: &i18n }, &State::default(), &looping);
    }

    #[test]
    fn scrub_start_is_reported_once() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::ScrubChanged(0.2)),
            Some(PlayerEvent::ScrubStarted)
        );
        assert_eq!(state.handle(Message::ScrubChanged(0.4)), None);
        assert!(state.is_scrubbing());
        assert_eq!(
            state.handle(Message::ScrubReleased),
            Some(PlayerEvent::ScrubReleased(0.4))
        );
        assert!(!state.is_scrubbing());
    }

    #[test]
    fn release_without_drag_is_ignored() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::ScrubReleased), None);
    }

    #[test]
    fn buttons_map_to_events() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::TapOverlay),
            Some(PlayerEvent::ToggleControls)
        );
        assert_eq!(
            state.handle(Message::TogglePlayback),
            Some(PlayerEvent::TogglePlayback)
        );
        assert_eq!(state.handle(Message::Back), Some(PlayerEvent::Back));
    }

    #[test]
    fn slider_shows_preview_while_scrubbing() {
        let directives = directives_for(PlayerOptions::default().with_source("clip.mp4"));
        let mut state = State::default();
        assert_abs_diff_eq!(state.slider_value(&directives), 0.25, epsilon = F64_EPSILON);

        state.handle(Message::ScrubChanged(0.9));
        assert_abs_diff_eq!(state.slider_value(&directives), 0.9, epsilon = F64_EPSILON);
    }
}
