// src/state/session.rs
use anyhow::Result;

use crate::config::Metric;
use crate::geo::{GeoDocument, GeoSource};
use crate::plot::{PlotBuilder, Visual};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    Idle,
    Transitioning { to: Metric },
}

/// The visual currently on screen. Replaced whole on every selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub visual: Visual,
}

/// The single viewing session: the geo data plus what is being shown.
#[derive(Debug)]
pub struct Session {
    source: GeoSource,
    display: DisplayState,
    controller: ControllerState,
}

impl Session {
    pub fn new(document: &GeoDocument, initial: Metric) -> Result<Self> {
        let source = GeoSource::from_document(document)?;
        let visual = PlotBuilder::new(&source).build(initial)?;

        Ok(Self {
            source,
            display: DisplayState { visual },
            controller: ControllerState::Idle,
        })
    }

    pub fn source(&self) -> &GeoSource {
        &self.source
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn selected(&self) -> Metric {
        self.display.visual.metric
    }

    pub fn controller_state(&self) -> ControllerState {
        self.controller
    }

    /// Dropdown entries, in display order.
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Metric::ALL.into_iter().map(Metric::label)
    }

    pub fn select_label(&mut self, label: &str) -> Result<()> {
        let metric = Metric::from_label(label)?;
        self.select(metric)
    }

    /// Rebuild the plot for `metric` and swap it in. On failure the previous visual stays.
    pub fn select(&mut self, metric: Metric) -> Result<()> {
        debug_assert_eq!(self.controller, ControllerState::Idle);
        tracing::debug!(from = %self.selected(), to = %metric, "selection changed");
        self.controller = ControllerState::Transitioning { to: metric };
        let built = PlotBuilder::new(&self.source).build(metric);
        self.controller = ControllerState::Idle;

        self.display = DisplayState { visual: built? };
        Ok(())
    }
}
