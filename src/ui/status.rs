/// Transient message shown at the right end of the button panel
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    text: Option<String>,
    remaining: f32,
}

impl StatusLine {
    /// Seconds a message stays visible
    pub const LIFETIME: f32 = 4.0;
    /// Longest message that fits between the buttons and the window edge
    pub const MAX_CHARS: usize = 30;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.text = Some(message.into());
        self.remaining = Self::LIFETIME;
    }

    pub fn clear(&mut self) {
        self.text = None;
        self.remaining = 0.0;
    }

    /// Age the message by one frame
    pub fn update(&mut self, delta_time: f32) {
        if self.text.is_none() {
            return;
        }
        self.remaining -= delta_time;
        if self.remaining <= 0.0 {
            self.clear();
        }
    }

    /// The visible text, shortened with "..." when it would overlap the buttons
    pub fn text(&self) -> Option<String> {
        let text = self.text.as_deref()?;
        if text.chars().count() <= Self::MAX_CHARS {
            return Some(text.to_owned());
        }
        let head: String = text.chars().take(Self::MAX_CHARS - 3).collect();
        Some(format!("{head}..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires() {
        let mut status = StatusLine::new();
        status.show("saved life.json");
        status.update(StatusLine::LIFETIME - 0.5);
        assert_eq!(status.text().as_deref(), Some("saved life.json"));
        status.update(1.0);
        assert_eq!(status.text(), None);
    }

    #[test]
    fn test_clear_hides_message() {
        let mut status = StatusLine::new();
        status.show("cannot step while running");
        status.clear();
        assert_eq!(status.text(), None);
    }

    #[test]
    fn test_long_message_is_shortened() {
        let mut status = StatusLine::new();
        status.show("failed to access snapshot file: No such file or directory (os error 2)");
        let text = status.text().unwrap();
        assert_eq!(text.chars().count(), StatusLine::MAX_CHARS);
        assert!(text.ends_with("..."));
        assert!(text.starts_with("failed to access"));
    }

    #[test]
    fn test_new_message_restarts_timer() {
        let mut status = StatusLine::new();
        status.show("first");
        status.update(StatusLine::LIFETIME - 0.1);
        status.show("second");
        status.update(1.0);
        assert_eq!(status.text().as_deref(), Some("second"));
    }
}
