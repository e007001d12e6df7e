/// Commands the presentation layer sends to the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Step,
    Clear,
    ToggleCell { x: usize, y: usize },
    KillCell { x: usize, y: usize },
    LoadPattern { id: String, x: usize, y: usize },
}
