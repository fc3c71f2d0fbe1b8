use crate::events::AppEvent;
use async_channel::Sender;
use gyrectl::ipc::{self, ControlCommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub async fn run_server(tx: Sender<AppEvent>) {
    let socket_path = ipc::socket_path();

    // Cleanup old socket if it exists
    if std::fs::metadata(&socket_path).is_ok() {
        let _ = std::fs::remove_file(&socket_path);
    }

    let listener = match UnixListener::bind(&socket_path) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind {}: {}", socket_path.display(), e);
            return;
        }
    };
    log::info!("Listening on {}", socket_path.display());

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match line.parse::<ControlCommand>() {
                            Ok(cmd) => {
                                if tx.send(AppEvent::from(cmd)).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => log::warn!("Ignoring control line '{}': {}", line, e),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_becomes_config_reload() {
        let event = AppEvent::from("reload".parse::<ControlCommand>().unwrap());
        assert!(matches!(event, AppEvent::ConfigReload));

        let event = AppEvent::from("speed 0.5".parse::<ControlCommand>().unwrap());
        assert!(matches!(event, AppEvent::Control(ControlCommand::Speed(s)) if s == 0.5));
    }
}
