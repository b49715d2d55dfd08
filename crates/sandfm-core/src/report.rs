//! State snapshot construction.

use crate::action::available_actions;
use crate::nav::model::DirectoryModel;
use crate::protocol::OutboundMessage;

/// Builds the outbound state snapshot for the given model.
///
/// Actions are derived fresh on every call. The session loop sends a
/// state message after every command that produced a reply, and the
/// view requests one after every gesture, so this must stay cheap and
/// side-effect free.
pub fn build_state(model: &DirectoryModel) -> OutboundMessage {
    OutboundMessage::State {
        path: model.current_path().to_string_lossy().into_owned(),
        selected: model
            .selected_path()
            .map(|p| p.to_string_lossy().into_owned()),
        actions: available_actions(model.selected_entry()),
    }
}
