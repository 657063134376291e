//! Turning slider state into [`Shape`]s.
//!
//! Painting is a pure function of a [`SliderFrame`] and a style, so it can be
//! tested without a slider and reused by hosts that keep their own state.

use slider_math::{Direction, Rect, TrackGeometry};

use crate::{
    CircleShape, ImageShape, RectShape, Shape, SwitchSliderStyle, TextMeasure, TextShape,
};

/// Which part of the slider to paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualRole {
    /// The capsule fill and the label on it.
    Track,

    /// The round button and its image.
    Button,
}

impl VisualRole {
    /// Back to front.
    pub const ALL: [Self; 2] = [Self::Track, Self::Button];
}

/// Everything painting needs to know about a slider at one moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderFrame {
    pub rect: Rect,
    pub progress: f32,
    pub direction: Direction,
    pub gap: f32,
}

impl SliderFrame {
    #[inline]
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(self.rect, self.gap, self.direction)
    }

    /// How far the button has travelled towards completion, in `0..=1`.
    #[inline]
    pub fn travel(&self) -> f32 {
        self.direction.mirror(self.progress)
    }
}

/// Paint the whole slider: track fill, label, button, image.
pub fn paint(
    frame: &SliderFrame,
    style: &SwitchSliderStyle,
    measure: &dyn TextMeasure,
) -> Vec<Shape> {
    VisualRole::ALL
        .into_iter()
        .flat_map(|role| paint_role(role, frame, style, measure))
        .collect()
}

/// Paint one part of the slider.
pub fn paint_role(
    role: VisualRole,
    frame: &SliderFrame,
    style: &SwitchSliderStyle,
    measure: &dyn TextMeasure,
) -> Vec<Shape> {
    let geometry = frame.geometry();
    let mut shapes = Vec::with_capacity(2);

    match role {
        VisualRole::Track => {
            let mut fill = style.track_color_at(frame.travel());
            if style.fade_track {
                fill = fill.with_alpha(fill.a() * geometry.fill_opacity(frame.progress));
            }
            shapes.push(
                RectShape {
                    rect: geometry.fill_rect(frame.progress),
                    corner_radius: geometry.corner_radius(),
                    fill,
                }
                .into(),
            );

            if let Some(text) = &style.text {
                let clip_rect = geometry.text_clip_rect(frame.progress);
                if clip_rect.width() > 0.0 {
                    let size = measure.measure(text, &style.text_font);
                    shapes.push(
                        TextShape {
                            pos: geometry.text_anchor(size),
                            text: text.clone(),
                            font: style.text_font.clone(),
                            color: style.text_color,
                            clip_rect,
                        }
                        .into(),
                    );
                }
            }
        }

        VisualRole::Button => {
            let button = geometry.button_rect(frame.progress);
            let radius = button.min_dimension() / 2.0;
            if radius > 0.0 {
                shapes.push(
                    CircleShape {
                        center: button.center(),
                        radius,
                        fill: style.button_color_at(frame.travel()),
                    }
                    .into(),
                );
            }

            if let Some(image) = &style.image {
                shapes.push(
                    ImageShape {
                        id: image.id,
                        rect: Rect::from_center_size(button.center(), image.size),
                    }
                    .into(),
                );
            }
        }
    }

    shapes
}

#[cfg(test)]
mod tests {
    use slider_color::Rgba;
    use slider_math::{pos2, rect_from_size, vec2};

    use super::*;
    use crate::{FontId, ImageSource};
    use slider_math::Vec2;

    fn measure(text: &str, font: &FontId) -> Vec2 {
        vec2(0.5 * font.size * text.len() as f32, font.size)
    }

    fn frame(progress: f32, direction: Direction) -> SliderFrame {
        SliderFrame {
            rect: rect_from_size(200.0, 40.0),
            progress,
            direction,
            gap: 8.0,
        }
    }

    fn labelled() -> SwitchSliderStyle {
        SwitchSliderStyle {
            text: Some("Slide".to_owned()),
            image: Some(ImageSource {
                id: 3,
                size: vec2(10.0, 10.0),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_paint_order() {
        let shapes = paint(&frame(0.0, Direction::LeftToRight), &labelled(), &measure);
        assert_eq!(shapes.len(), 4);
        assert!(matches!(shapes[0], Shape::Rect(_)));
        assert!(matches!(shapes[1], Shape::Text(_)));
        assert!(matches!(shapes[2], Shape::Circle(_)));
        assert!(matches!(shapes[3], Shape::Image(_)));
    }

    #[test]
    fn test_button_follows_progress() {
        let style = SwitchSliderStyle::default();
        let shapes = paint_role(
            VisualRole::Button,
            &frame(0.5, Direction::LeftToRight),
            &style,
            &measure,
        );
        let Some(Shape::Circle(circle)) = shapes.first() else {
            panic!("expected a circle, got {shapes:?}");
        };
        // drag 160 * 0.5 + inset 4 + radius 16
        assert_eq!(circle.center, pos2(100.0, 20.0));
        assert_eq!(circle.radius, 16.0);
        assert_eq!(circle.fill, Rgba::WHITE);
    }

    #[test]
    fn test_image_centred_on_button() {
        let shapes = paint_role(
            VisualRole::Button,
            &frame(0.0, Direction::LeftToRight),
            &labelled(),
            &measure,
        );
        let Some(Shape::Image(image)) = shapes.get(1) else {
            panic!("expected an image, got {shapes:?}");
        };
        assert_eq!(image.id, 3);
        assert_eq!(image.rect.center(), pos2(20.0, 20.0));
    }

    #[test]
    fn test_label_clipped_by_button() {
        // LTR at the end: only the trailing cap is left for the label.
        let shapes = paint_role(
            VisualRole::Track,
            &frame(1.0, Direction::LeftToRight),
            &labelled(),
            &measure,
        );
        let Some(Shape::Text(text)) = shapes.get(1) else {
            panic!("expected text, got {shapes:?}");
        };
        assert_eq!(text.clip_rect.left(), 180.0);
        assert_eq!(text.clip_rect.right(), 200.0);

        // RTL at the end: nothing is left.
        let shapes = paint_role(
            VisualRole::Track,
            &frame(0.0, Direction::RightToLeft),
            &labelled(),
            &measure,
        );
        assert_eq!(shapes.len(), 1);
    }

    #[test]
    fn test_label_anchor() {
        let style = labelled();
        assert_eq!(measure("Slide", &style.text_font), vec2(60.0, 24.0));

        let shapes = paint_role(
            VisualRole::Track,
            &frame(1.0, Direction::RightToLeft),
            &style,
            &measure,
        );
        let Some(Shape::Text(text)) = shapes.get(1) else {
            panic!("expected text, got {shapes:?}");
        };
        assert_eq!(text.pos, pos2(20.0, 8.0));
        assert_eq!(text.color, Rgba::LIGHT_GRAY);
    }

    #[test]
    fn test_fade_track() {
        let style = SwitchSliderStyle {
            fade_track: true,
            ..Default::default()
        };
        let alpha_at = |progress, direction| {
            let shapes = paint_role(VisualRole::Track, &frame(progress, direction), &style, &measure);
            match shapes.first() {
                Some(Shape::Rect(rect)) => rect.fill.a(),
                _ => f32::NAN,
            }
        };
        assert_eq!(alpha_at(1.0, Direction::RightToLeft), 1.0);
        assert_eq!(alpha_at(0.25, Direction::RightToLeft), 0.25);
        // progress - 1 is never positive, so a faded LTR fill stays invisible.
        assert_eq!(alpha_at(0.5, Direction::LeftToRight), 0.0);
        assert_eq!(alpha_at(1.0, Direction::LeftToRight), 0.0);

        let opaque = SwitchSliderStyle::default();
        let shapes = paint_role(
            VisualRole::Track,
            &frame(0.5, Direction::LeftToRight),
            &opaque,
            &measure,
        );
        assert!(matches!(&shapes[0], Shape::Rect(rect) if rect.fill == Rgba::DARK_GRAY));
    }

    #[test]
    fn test_degenerate_track_has_no_button() {
        let frame = SliderFrame {
            rect: rect_from_size(10.0, 8.0),
            progress: 0.0,
            direction: Direction::LeftToRight,
            gap: 8.0,
        };
        let shapes = paint_role(VisualRole::Button, &frame, &SwitchSliderStyle::default(), &measure);
        assert!(shapes.is_empty());
    }
}
