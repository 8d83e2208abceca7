//! Render model: a pure snapshot of what the wheel should look like now.
//!
//! Rebuilt from scratch for every redraw from the session and the visual
//! configuration; nothing is patched incrementally. Angles are wheel-space
//! radians with the pointer fixed at [`POINTER_ANGLE`].

use core::f64::consts::TAU;

use raffle_abi::{Color32, FontSpec, PointerStyle, TicketNumber};
use raffle_lib::{LABEL_MAX_CHARS, segment_label, truncate_chars};

use crate::animation::slice_angle;
use crate::config::{DisplayFlags, VisualConfig};
use crate::session::{DrawSession, WinnerBanner};

/// Wheel-space angle of the fixed pointer.
pub const POINTER_ANGLE: f64 = 0.0;

/// Tolerance for landings that sit exactly on a segment edge.
const EDGE_EPSILON: f64 = 1e-9;

/// Gap between the wheel rim and the canvas edge, outside the border.
const RIM_MARGIN: f64 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Position in the pool.
    pub index: usize,
    pub ticket_number: TicketNumber,
    /// Covers `[start_angle, end_angle)`.
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color32,
    pub text_color: Color32,
    pub label: Option<String>,
}

impl Segment {
    #[inline]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderStyle {
    pub width: u32,
    pub color: Color32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMark {
    pub style: PointerStyle,
    pub color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    pub width: u32,
    pub height: u32,
    pub center: (f64, f64),
    pub radius: f64,
    pub segments: Vec<Segment>,
    pub pointer_angle: f64,
    pub rotation_angle: f64,
    pub font: FontSpec,
    pub border: Option<BorderStyle>,
    pub pointer: Option<PointerMark>,
    pub banner: Option<WinnerBanner>,
    pub is_spinning: bool,
}

fn label_for(ticket: &raffle_abi::Ticket, display: DisplayFlags) -> Option<String> {
    let name = display
        .contains(DisplayFlags::NAMES)
        .then(|| ticket.display_name())
        .flatten();
    if display.contains(DisplayFlags::NUMBERS) {
        Some(segment_label(ticket.number, name))
    } else {
        name.map(|name| truncate_chars(name, LABEL_MAX_CHARS))
    }
}

impl RenderModel {
    pub fn build(session: &DrawSession, visual: &VisualConfig) -> Self {
        let rotation = session.rotation_angle();
        let pool = session.pool();
        let slice = if pool.is_empty() {
            TAU
        } else {
            slice_angle(pool.len())
        };

        let segments = pool
            .iter()
            .enumerate()
            .map(|(index, ticket)| {
                let color = visual.color_scheme.color_for(index);
                Segment {
                    index,
                    ticket_number: ticket.number,
                    start_angle: index as f64 * slice + rotation,
                    end_angle: (index + 1) as f64 * slice + rotation,
                    color,
                    text_color: color.contrasting_text(),
                    label: label_for(ticket, visual.display),
                }
            })
            .collect();

        let border = visual
            .display
            .contains(DisplayFlags::BORDER)
            .then_some(BorderStyle {
                width: visual.border_width,
                color: visual.border_color,
            });
        let border_width = border.map_or(0.0, |b| b.width as f64);
        let half = visual.width.min(visual.height) as f64 / 2.0;

        Self {
            width: visual.width,
            height: visual.height,
            center: (visual.width as f64 / 2.0, visual.height as f64 / 2.0),
            radius: (half - border_width - RIM_MARGIN).max(0.0),
            segments,
            pointer_angle: POINTER_ANGLE,
            rotation_angle: rotation,
            font: visual.font_style.spec(),
            border,
            pointer: visual
                .display
                .contains(DisplayFlags::POINTER)
                .then_some(PointerMark {
                    style: visual.pointer_style,
                    color: visual.pointer_color,
                }),
            banner: session.last_banner().cloned(),
            is_spinning: session.is_spinning(),
        }
    }

    /// Segment currently under the pointer.
    pub fn segment_under_pointer(&self) -> Option<&Segment> {
        let n = self.segments.len();
        if n == 0 {
            return None;
        }
        let slice = slice_angle(n);
        let rel = (self.pointer_angle - self.rotation_angle).rem_euclid(TAU);
        let index = (rel / slice + EDGE_EPSILON).floor() as usize % n;
        self.segments.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raffle_abi::{ColorScheme, Ticket};

    fn session(numbers: &[u32]) -> DrawSession {
        let tickets: Vec<Ticket> = numbers
            .iter()
            .map(|&n| Ticket::paid(n, "Maximiliano Rodriguez"))
            .collect();
        DrawSession::new(&tickets, 1)
    }

    #[test]
    fn test_segments_tile_the_circle() {
        let model = RenderModel::build(&session(&[3, 5, 9, 11]), &VisualConfig::default());
        assert_eq!(model.segments.len(), 4);
        assert_eq!(model.segments[0].start_angle, 0.0);
        for pair in model.segments.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
        }
        assert!((model.segments[3].end_angle - TAU).abs() < 1e-12);
        assert_eq!(model.segments[2].ticket_number, 9);
    }

    #[test]
    fn test_colors_round_robin() {
        let visual = VisualConfig {
            color_scheme: ColorScheme::Ocean,
            ..VisualConfig::default()
        };
        let numbers: Vec<u32> = (1..=7).collect();
        let model = RenderModel::build(&session(&numbers), &visual);
        let palette = ColorScheme::Ocean.colors();
        assert_eq!(model.segments[0].color, palette[0]);
        assert_eq!(model.segments[palette.len()].color, palette[0]);
        assert_eq!(model.segments[1].color, palette[1]);
    }

    #[test]
    fn test_label_toggles() {
        let s = session(&[7]);
        let mut visual = VisualConfig::default();
        let model = RenderModel::build(&s, &visual);
        assert_eq!(model.segments[0].label.as_deref(), Some("7"));

        visual.display |= DisplayFlags::NAMES;
        let model = RenderModel::build(&s, &visual);
        assert_eq!(model.segments[0].label.as_deref(), Some("7 - Maximili..."));

        visual.display.remove(DisplayFlags::NUMBERS);
        let model = RenderModel::build(&s, &visual);
        assert_eq!(model.segments[0].label.as_deref(), Some("Maximiliano..."));

        visual.display.remove(DisplayFlags::NAMES);
        let model = RenderModel::build(&s, &visual);
        assert_eq!(model.segments[0].label, None);
    }

    #[test]
    fn test_styling_toggles() {
        let mut visual = VisualConfig::default();
        let model = RenderModel::build(&session(&[1]), &visual);
        assert!(model.border.is_some());
        assert!(model.pointer.is_some());
        assert_eq!(model.radius, 240.0 - 4.0 - RIM_MARGIN);

        visual.display.remove(DisplayFlags::BORDER | DisplayFlags::POINTER);
        let model = RenderModel::build(&session(&[1]), &visual);
        assert!(model.border.is_none());
        assert!(model.pointer.is_none());
        assert_eq!(model.radius, 240.0 - RIM_MARGIN);
    }

    #[test]
    fn test_pointer_lookup_at_rest() {
        let model = RenderModel::build(&session(&[1, 2, 3, 4]), &VisualConfig::default());
        assert_eq!(model.segment_under_pointer().map(|s| s.index), Some(0));

        let mut model = model;
        model.rotation_angle = -(2.0 * slice_angle(4)) - 3.0 * TAU;
        assert_eq!(model.segment_under_pointer().map(|s| s.index), Some(2));

        model.rotation_angle = -(2.5 * slice_angle(4));
        assert_eq!(model.segment_under_pointer().map(|s| s.index), Some(2));
    }

    #[test]
    fn test_empty_pool_has_no_segments() {
        let model = RenderModel::build(&DrawSession::new(&[], 1), &VisualConfig::default());
        assert!(model.segments.is_empty());
        assert!(model.segment_under_pointer().is_none());
    }
}
