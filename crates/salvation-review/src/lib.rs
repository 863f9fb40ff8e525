//! `salvation-review` is a terminal screen for reviewing and de-duplicating person records, built
//! on [`datalist_core`].
//!
//! The screen ([`screen::ReviewScreen`]) pulls records from a [`source::RecordSource`], shows them
//! through the responsive list, and lets the user:
//! - review a row, which opens a Keep / Delete [`dialog::ConfirmDialog`];
//! - edit or add a person (with [`access::Permission::UserEdit`]), producing an
//!   [`screen::EditDraft`] for the host's editor;
//! - open a person's detail page (with [`access::Permission::UserView`]) via a
//!   [`navigation::Navigator`].
//!
//! Fetching, routing and the editor itself stay with the host application.
pub mod access;
pub mod error;

pub mod columns;
pub mod navigation;
pub mod source;

pub mod dialog;
pub mod screen;

pub use error::ReviewError;
pub use error::SourceError;
