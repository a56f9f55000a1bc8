//! Plotting surfaces
//!
//! The plot helpers never construct a surface: they receive one and add
//! artists to it. [`Surface`] is the seam; [`Axes`] is the in-memory
//! implementation that records artists so callers can inspect, restyle or
//! remove them afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{validation, PlotResult, SurfaceError};
use crate::patch::{Ellipse, FillBetween, Patch};
use crate::style::Style;

/// Identifier of an artist on a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtistId(pub usize);

/// What an artist draws
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ArtistKind {
    Patch(Patch),
    Fill(FillBetween),
}

/// A drawable artifact plus its style
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub kind: ArtistKind,
    pub style: Style,
}

impl Artist {
    /// The ellipse, if this artist is one
    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match &self.kind {
            ArtistKind::Patch(Patch::Ellipse(e)) => Some(e),
            _ => None,
        }
    }

    /// The fill, if this artist is one
    pub fn as_fill(&self) -> Option<&FillBetween> {
        match &self.kind {
            ArtistKind::Fill(f) => Some(f),
            _ => None,
        }
    }
}

/// Something the plot helpers can draw on
pub trait Surface {
    /// Add a closed shape
    fn add_patch(&mut self, patch: Patch, style: Style) -> PlotResult<ArtistId>;

    /// Fill the area between two curves
    fn fill_between(&mut self, fill: FillBetween, style: Style) -> PlotResult<ArtistId>;
}

/// In-memory surface recording every artist added to it
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Axes {
    artists: Vec<(ArtistId, Artist)>,
    next_id: usize,
    /// Optional title
    pub title: Option<String>,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: ArtistKind, style: Style) -> ArtistId {
        let id = ArtistId(self.next_id);
        self.next_id += 1;
        self.artists.push((id, Artist { kind, style }));
        id
    }

    /// Look up an artist
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|(i, _)| *i == id).map(|(_, a)| a)
    }

    /// Mutable access to an artist
    pub fn artist_mut(&mut self, id: ArtistId) -> Option<&mut Artist> {
        self.artists
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, a)| a)
    }

    /// Mutable access to an ellipse artist's geometry
    pub fn ellipse_mut(&mut self, id: ArtistId) -> Option<&mut Ellipse> {
        match self.artist_mut(id).map(|a| &mut a.kind) {
            Some(ArtistKind::Patch(Patch::Ellipse(e))) => Some(e),
            _ => None,
        }
    }

    /// Remove an artist, returning it
    pub fn remove(&mut self, id: ArtistId) -> Result<Artist, SurfaceError> {
        let pos = self
            .artists
            .iter()
            .position(|(i, _)| *i == id)
            .ok_or(SurfaceError::UnknownArtist { id: id.0 })?;
        Ok(self.artists.remove(pos).1)
    }

    /// Artists in insertion order
    pub fn artists(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().map(|(_, a)| a)
    }

    /// Artists sorted by z-order, ties kept in insertion order
    pub fn draw_order(&self) -> Vec<&Artist> {
        let mut ordered: Vec<&Artist> = self.artists().collect();
        ordered.sort_by(|a, b| {
            let za = a.style.z_order.unwrap_or(0.0);
            let zb = b.style.z_order.unwrap_or(0.0);
            za.total_cmp(&zb)
        });
        ordered
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Remove every artist
    pub fn clear(&mut self) {
        self.artists.clear();
    }
}

impl Surface for Axes {
    fn add_patch(&mut self, patch: Patch, style: Style) -> PlotResult<ArtistId> {
        Ok(self.push(ArtistKind::Patch(patch), style))
    }

    fn fill_between(&mut self, fill: FillBetween, style: Style) -> PlotResult<ArtistId> {
        validation::validate_fill_lengths(fill.xs.len(), fill.y_lower.len(), fill.y_upper.len())?;
        Ok(self.push(ArtistKind::Fill(fill), style))
    }
}
