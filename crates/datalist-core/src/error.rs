use thiserror::Error;

/// Configuration errors raised while building a [`crate::schema::ColumnSchema`] or a
/// [`crate::pagination::Pagination`].
///
/// These are precondition violations: they are reported once, at construction time, so the view
/// never renders ambiguous columns or an unreachable page size.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DataListError {
    #[error("column #{index} has an empty name")]
    EmptyColumnName { index: usize },

    #[error("column '{name}' has an empty label")]
    EmptyColumnLabel { name: String },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// An action renderer on a column with any other label, or a value renderer on the `Action`
    /// column. An `Action` column with no renderer is accepted and shows its field value.
    #[error("column '{name}': action renderers are only valid on the 'Action' column")]
    ActionRendererMismatch { name: String },

    #[error("rows-per-page options must not be empty")]
    EmptyRowsPerPageOptions,

    #[error("rows-per-page must be positive")]
    ZeroRowsPerPage,

    #[error("rows-per-page {0} is not one of the allowed options")]
    RowsPerPageNotAllowed(usize),
}
