/// The environment a session runs in: dialogs, score persistence and the
/// end-line indicator.
///
/// Calls are synchronous. The session pauses the simulation around every
/// dialog, so a host that blocks until the player answers loses no state.
pub trait GameHost {
    /// Shows a modal message
    fn show_message(&mut self, message: &str);

    /// Asks the player for a name; `None` when the dialog was cancelled
    fn request_player_name(&mut self, prompt: &str) -> Option<String>;

    /// Stores a finished round's score
    fn persist_score(&mut self, name: &str, score: u32);

    /// Shows or hides the end line
    fn set_end_line_visible(&mut self, _visible: bool) {}
}
