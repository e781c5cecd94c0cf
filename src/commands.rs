//! Dashboard actions.
//!
//! Every button on the dashboard is a [`Command`]. None of them has real behavior
//! yet; the [`CommandHandler`] default reports each one as not available.

use thiserror::Error;

/// Index into the list panel the action belongs to.
pub type Row = usize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// "Answer" on an attention item.
    Answer(Row),
    /// "Add to FAQ" on an attention item.
    AddToFaq(Row),
    /// "Forward" on an attention item.
    Forward(Row),
    UpdateThesePolicies,
    ViewFeedbackQueue,
    ViewFullFeedback(Row),
    ReplyToUser(Row),
    /// One of the sidebar quick actions.
    QuickAction(Row),
    ManageAllContent,
    CreatePolicyUpdate,
    /// One of the help & resources links.
    OpenResource(Row),
    Help,
    OpenMenuIcon,
    Profile,
    Notifications,
    Settings,
    SignOut,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Answer(_) => "Answer",
            Command::AddToFaq(_) => "Add to FAQ",
            Command::Forward(_) => "Forward",
            Command::UpdateThesePolicies => "Update These Policies",
            Command::ViewFeedbackQueue => "View feedback queue",
            Command::ViewFullFeedback(_) => "View Full Feedback",
            Command::ReplyToUser(_) => "Reply to User",
            Command::QuickAction(_) => "Quick Action",
            Command::ManageAllContent => "Manage All Content",
            Command::CreatePolicyUpdate => "Create Policy Update",
            Command::OpenResource(_) => "Open Resource",
            Command::Help => "Help",
            Command::OpenMenuIcon => "Menu",
            Command::Profile => "Profile",
            Command::Notifications => "Notifications",
            Command::Settings => "Settings",
            Command::SignOut => "Sign Out",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{}' is not available yet", .0.label())]
    NotAvailable(Command),
}

#[cfg_attr(test, mockall::automock)]
pub trait CommandHandler {
    fn handle(&mut self, command: Command) -> Result<(), CommandError> {
        Err(CommandError::NotAvailable(command))
    }
}

/// Handler with no behavior for any command.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCommandHandler;

impl CommandHandler for NoopCommandHandler {}
