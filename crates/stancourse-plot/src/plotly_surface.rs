//! plotly backend
//!
//! Ellipses become layout path shapes in data coordinates, fills become
//! scatter traces filled down to zero (or to a companion lower trace).

use plotly::common::{DashType, Fill, Line, Mode};
use plotly::layout::{Layout, Shape, ShapeLayer, ShapeLine, ShapeType};
use plotly::{Plot, Scatter};

use crate::color::{Color, BL1};
use crate::config::PlotConfig;
use crate::error::{validation, PlotResult};
use crate::patch::{FillBetween, Patch};
use crate::style::{LineStyle, Style};
use crate::surface::{ArtistId, Surface};

/// A plotly figure under construction
pub struct PlotlySurface {
    plot: Plot,
    layout: Layout,
    boundary_segments: usize,
    next_id: usize,
}

impl PlotlySurface {
    pub fn new() -> Self {
        Self::with_layout(Layout::new())
    }

    /// Start from an existing layout (title, axes, ...)
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            plot: Plot::new(),
            layout,
            boundary_segments: 100,
            next_id: 0,
        }
    }

    /// Start with the outline resolution from `config.ellipse`
    pub fn from_config(config: &PlotConfig) -> Self {
        Self::new().boundary_segments(config.ellipse.boundary_segments)
    }

    /// Number of outline segments used for ellipse paths
    pub fn boundary_segments(mut self, segments: usize) -> Self {
        self.boundary_segments = segments.max(3);
        self
    }

    fn next(&mut self) -> ArtistId {
        let id = ArtistId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Finish the figure
    pub fn into_plot(mut self) -> Plot {
        self.plot.set_layout(self.layout);
        self.plot
    }

    /// Inline HTML snippet for notebook output
    pub fn to_inline_html(self, div_id: Option<&str>) -> String {
        self.into_plot().to_inline_html(div_id)
    }
}

impl Default for PlotlySurface {
    fn default() -> Self {
        Self::new()
    }
}

fn dash(style: LineStyle) -> DashType {
    match style {
        LineStyle::Solid | LineStyle::None => DashType::Solid,
        LineStyle::Dashed => DashType::Dash,
        LineStyle::Dotted => DashType::Dot,
        LineStyle::DashDot => DashType::DashDot,
    }
}

fn svg_path(points: &[[f64; 2]]) -> String {
    let mut path = String::new();
    for (i, [x, y]) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{cmd} {x} {y} "));
    }
    path.push('Z');
    path
}

fn shape_line(style: &Style) -> ShapeLine {
    let line_style = style.line_style.unwrap_or_default();
    let width = if line_style == LineStyle::None {
        0.0
    } else {
        style.line_width.unwrap_or(1.0) as f64
    };
    ShapeLine::new()
        .color(style.resolved_edge_color(BL1).to_css())
        .width(width)
        .dash(dash(line_style))
}

impl Surface for PlotlySurface {
    fn add_patch(&mut self, patch: Patch, style: Style) -> PlotResult<ArtistId> {
        let Patch::Ellipse(ellipse) = patch;
        let path = svg_path(&ellipse.boundary(self.boundary_segments));

        let fill = if style.fill.unwrap_or(true) {
            style.resolved_face_color(BL1)
        } else {
            Color::new(0.0, 0.0, 0.0, 0.0)
        };

        let layer = if style.z_order.unwrap_or(0.0) < 0.0 {
            ShapeLayer::Below
        } else {
            ShapeLayer::Above
        };

        let shape = Shape::new()
            .shape_type(ShapeType::Path)
            .path(path.as_str())
            .x_ref("x")
            .y_ref("y")
            .fill_color(fill.to_css())
            .line(shape_line(&style))
            .layer(layer);

        self.layout.add_shape(shape);
        Ok(self.next())
    }

    fn fill_between(&mut self, fill: FillBetween, style: Style) -> PlotResult<ArtistId> {
        validation::validate_fill_lengths(fill.xs.len(), fill.y_lower.len(), fill.y_upper.len())?;

        let face = style.resolved_face_color(BL1).to_css();
        let edge = style.resolved_edge_color(BL1).to_css();
        let to_zero = fill.y_lower.iter().all(|&y| y == 0.0);

        if !to_zero {
            let lower = Scatter::new(fill.xs.clone(), fill.y_lower)
                .mode(Mode::Lines)
                .line(Line::new().width(0.0))
                .show_legend(false);
            self.plot.add_trace(lower);
        }

        let mut upper = Scatter::new(fill.xs, fill.y_upper)
            .mode(Mode::Lines)
            .fill(if to_zero { Fill::ToZeroY } else { Fill::ToNextY })
            .fill_color(face)
            .line(
                Line::new()
                    .color(edge)
                    .width(style.line_width.unwrap_or(1.0) as f64)
                    .dash(dash(style.line_style.unwrap_or_default())),
            );
        match &style.label {
            Some(label) => upper = upper.name(label.as_str()),
            None => upper = upper.show_legend(false),
        }
        self.plot.add_trace(upper);

        Ok(self.next())
    }
}
