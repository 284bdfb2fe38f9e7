//! 控制台通知（ConsoleNotifier）
//!
//! 订阅启动/停止事件并打印通知文本。文本仅作提示，不构成兼容性契约。

use crate::domain_event::{EventEnvelope, TrainEvent};
use crate::eventing::{EventHandler, HandledEventType};

/// 启动/停止事件的控制台通知器
pub struct ConsoleNotifier;

impl EventHandler for ConsoleNotifier {
    fn handler_name(&self) -> &str {
        "console-notifier"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::Many(vec![
            "train.started".to_string(),
            "train.stopped".to_string(),
        ])
    }

    fn handle(&self, event: &EventEnvelope) -> anyhow::Result<()> {
        match &event.payload {
            TrainEvent::Started {
                pulling_force,
                max_overall_weight,
                ..
            } => {
                println!(
                    "we started! train №{} (pulling force {pulling_force}, overall weight {max_overall_weight})",
                    event.metadata.train_id()
                );
            }
            TrainEvent::Stopped { .. } => {
                println!("we stopped. train №{}", event.metadata.train_id());
            }
            _ => {}
        }
        Ok(())
    }
}
