use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// This enum represents all possible error conditions in the CLI system,
/// from command discovery failures to execution errors. Each variant provides
/// contextual information to help users understand what went wrong.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    ///
    /// This occurs when users specify a command that doesn't exist, either
    /// because the category is invalid or the command name is wrong within
    /// a valid category.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// The wrong number of arguments was provided to a command.
    ///
    /// Returned when argument count validation fails, such as missing
    /// required arguments or too many arguments for the command's
    /// metadata.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A single argument had an unusable value.
    #[error("Invalid value for '{arg}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        arg: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A service-level failure occurred during execution.
    ///
    /// Used when an underlying service (menu API, diner store, playback)
    /// cannot be initialized or fails mid-operation.
    #[error("{service} service error: {details}")]
    ServiceError {
        /// The service that failed.
        service: String,
        /// Details of the failure.
        details: String,
    },

    /// An I/O operation failed.
    ///
    /// This automatically converts from `std::io::Error` for file
    /// operations or other I/O-related failures.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either a success message
/// as a String or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Defines the metadata for command arguments, enabling automatic help
/// generation, validation, and type hints for better user experience.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "slug", "dish-id").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
///
/// Helps with argument validation and provides hints in help text about
/// what kind of value is expected.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value (integer or float).
    Number,

    /// A boolean value (true/false, yes/no, 1/0).
    Boolean,

    /// A file system path or configuration path.
    Path,
}

/// Complete metadata for a CLI command.
///
/// Serves as the single source of truth for everything about a command:
/// its identity, arguments, usage examples, and categorization. The CLI
/// system uses this metadata for help generation, argument validation,
/// and command discovery.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "list", "add", "signup").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "hotel", "dish").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// All commands implement this trait to provide consistent execution
/// and metadata discovery. Commands receive dependencies through
/// their constructors or construct services during execution.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The command is responsible for its own argument value validation
    /// and business logic. The registry has already performed basic
    /// count validation against the command's metadata.
    ///
    /// # Arguments
    ///
    /// * `args` - Command-line arguments passed by the user
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failures, including invalid
    /// argument values, service unavailability, or I/O failures.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    ///
    /// This metadata is used by the CLI system for help generation,
    /// argument validation, and command discovery.
    fn metadata(&self) -> CommandMetadata;
}
