use super::model::State;
use super::{CAPTION_FONT_SIZE, HEADLINE_FONT_SIZE, IDLE_HEADLINE, POINTER_HALO_GROWTH};
use crate::gui::theme::ThemeColors;
use arcseek::geometry::{FULL_CIRCLE, PROGRESS_PER_REVOLUTION};
use arcseek::{ArcSpan, Circle, PickerItem, Point};
use cairo::{Context, LineCap};
use palette::Srgba;
use std::iter::zip;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Strokes `sweep` degrees of `circle` clockwise from `start`; a negative sweep goes
/// counter-clockwise.
fn stroke_arc(
    cr: &Context,
    circle: &Circle,
    start: f64,
    sweep: f64,
    width: f64,
) -> Result<(), cairo::Error> {
    if sweep == 0.0 || circle.is_empty() {
        return Ok(());
    }
    let (a1, a2) = (start.to_radians(), (start + sweep).to_radians());
    cr.new_path();
    cr.set_line_width(width);
    cr.set_line_cap(LineCap::Butt);
    if sweep > 0.0 {
        cr.arc(circle.center.x, circle.center.y, circle.radius(), a1, a2);
    } else {
        cr.arc_negative(circle.center.x, circle.center.y, circle.radius(), a1, a2);
    }
    cr.stroke()
}

fn stroke_span(
    cr: &Context,
    circle: &Circle,
    span: &ArcSpan,
    width: f64,
) -> Result<(), cairo::Error> {
    stroke_arc(cr, circle, span.start, span.sweep(), width)
}

fn draw_text(cr: &Context, text: &str, at: Point, size: f64) -> Result<(), cairo::Error> {
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(size);
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(at.x - ext.width() / 2.0, at.y + ext.height() / 2.0);
        cr.show_text(text)?;
    }
    Ok(())
}

struct ItemRenderer<'a> {
    item: &'a PickerItem,
    caption: &'a str,
}

impl<'a> ItemRenderer<'a> {
    fn new(item: &'a PickerItem, caption: &'a str) -> Self {
        Self { item, caption }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if self.item.seek().visible {
            self.draw_seek_ring(cr, colors)
        } else {
            self.draw_base(cr, colors)
        }
    }

    fn draw_base(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_color(cr, colors.item);
        stroke_span(
            cr,
            &self.item.circle(),
            &self.item.span(),
            self.item.stroke_width(),
        )?;

        set_color(cr, colors.text);
        draw_text(
            cr,
            self.caption,
            self.item.label_position(),
            CAPTION_FONT_SIZE,
        )
    }

    fn draw_seek_ring(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let circle = self.item.circle();
        let stroke = self.item.stroke_width();
        let seek = self.item.seek();

        // progress arc from the ring origin to the pointer
        set_color(cr, colors.progress);
        let sweep = FULL_CIRCLE * self.item.progress() / PROGRESS_PER_REVOLUTION;
        stroke_arc(cr, &circle, seek.origin, sweep, stroke)?;

        // pointer spans as wide as the item, centered on the pointer angle
        let pointer_sweep = self.item.span().sweep();
        let pointer_start = self.item.pointer_angle() - pointer_sweep / 2.0;
        if seek.enabled {
            set_color(cr, colors.pointer_halo);
            stroke_arc(
                cr,
                &circle,
                pointer_start,
                pointer_sweep,
                stroke + POINTER_HALO_GROWTH,
            )?;
        }
        set_color(cr, colors.progress);
        stroke_arc(cr, &circle, pointer_start, pointer_sweep, stroke)
    }
}

fn draw_orbit(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let picker = &state.picker;
    set_color(cr, colors.orbit);
    stroke_span(
        cr,
        &picker.circle(),
        &picker.orbit(),
        picker.style().stroke_width,
    )
}

fn draw_headline(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let text = state.headline.as_deref().unwrap_or(IDLE_HEADLINE);
    set_color(cr, colors.text);
    draw_text(cr, text, state.picker.circle().center, HEADLINE_FONT_SIZE)
}

pub fn draw(
    cr: &Context,
    state: &State,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(width / 2.0, height / 2.0);

    draw_orbit(cr, state, colors)?;
    for (item, caption) in zip(state.picker.items(), &state.captions) {
        if item.visible {
            ItemRenderer::new(item, caption).draw(cr, colors)?;
        }
    }
    draw_headline(cr, state, colors)?;

    cr.restore()
}
