/// Backing descriptor document model shared by commands.
pub mod input;
/// Backing kind listing command.
pub mod kinds;
/// Property extraction command.
pub mod props;
/// Shared output helpers.
pub mod util;
