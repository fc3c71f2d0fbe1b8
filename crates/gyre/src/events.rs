use gyrectl::ipc::ControlCommand;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Control(ControlCommand),
    ConfigReload,
}

impl From<ControlCommand> for AppEvent {
    fn from(cmd: ControlCommand) -> Self {
        match cmd {
            ControlCommand::Reload => AppEvent::ConfigReload,
            other => AppEvent::Control(other),
        }
    }
}
