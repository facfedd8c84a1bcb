use thiserror::Error as ThisError;

///
/// ConsoleError
///
/// Everything a console command can fail with. Command errors are printed
/// and the loop continues; only readline termination exits the shell.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ConsoleError {
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),

    #[error("no dataset open; try `open <dataset>` or `datasets`")]
    NoDataset,

    #[error(transparent)]
    ReadLine(#[from] rustyline::error::ReadlineError),

    #[error("unknown category `{0}`; categories: {1}")]
    UnknownCategory(String, String),

    #[error("unknown command `{0}`; try `help`")]
    UnknownCommand(String),

    #[error("unknown dataset `{0}`; available: {1}")]
    UnknownDataset(String, String),

    #[error("cannot sort by `{field}`; sortable columns: {sortable}")]
    UnknownField { field: String, sortable: String },

    #[error("no type named `{0}` in this catalog")]
    UnknownType(String),
}
