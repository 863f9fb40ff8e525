//! `datalist-core` is a schema-driven record list for ratatui that switches between a full table
//! and a stacked summary list depending on the space it is given.
//!
//! The crate is split into pure pieces that can be used on their own and one widget that ties
//! them together:
//! - [`schema::ColumnSchema`]: ordered column descriptors, including the row action column
//!   (label [`schema::ACTION_LABEL`]).
//! - [`sort::stable_sort`] / [`sort::get_sorting`]: stable ordering with a field comparator.
//! - [`pagination::Pagination`]: page / rows-per-page state; changing the page size returns to
//!   the first page.
//! - [`overlay::OverlayState`]: the single-target confirmation overlay state machine.
//! - [`view::DataListView`]: the responsive renderer and event handler.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - The caller owns the records. The view keeps only page, sort, cursor and scroll state and
//!   reports what happened through [`view::DataListAction`].
//! - Narrow mode shows every record in input order; wide mode sorts (by `id` ascending unless a
//!   column was chosen) and paginates.
//!
//! ## Getting started
//!
//! Build a [`schema::ColumnSchema`], a mobile projection (`Fn(&Record) -> MobileRow`), and hand
//! both to [`view::DataListView::render`] together with the records and a
//! [`breakpoint::ViewportClassifier`] such as [`breakpoint::WidthBreakpoint`]. Feed input through
//! [`view::DataListView::handle_event`]; with the `crossterm` feature,
//! [`crossterm_input::input_event_from_crossterm`] converts terminal events.
pub mod error;
pub mod theme;

pub mod record;
pub mod schema;

pub mod pagination;
pub mod sort;

pub mod breakpoint;
pub mod overlay;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod viewport;

pub mod bindings;
pub mod help;
pub mod input;
pub mod view;

pub use error::DataListError;
