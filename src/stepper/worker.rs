use crate::error::StepError;
use rand::Rng;
use serde_json::{Value, json};
use std::time::Duration;

/// The simulated work behind a single step.
///
/// `plan_delay` is called when a step begins and tells the external
/// scheduler how long to wait before delivering the completion callback;
/// `produce` is called when that callback fires and yields the step's
/// synthetic output. Splitting the two keeps the stepper itself free of any
/// blocking wait.
pub trait StepWorker {
    fn plan_delay(&mut self, node_id: &str) -> Duration;

    fn produce(&mut self, node_id: &str, input: &Value) -> Result<Value, StepError>;
}

/// Default worker: a 1–3 second random delay standing in for real work, and
/// a small JSON object as output.
#[derive(Debug, Clone, Default)]
pub struct SimulatedWorker {
    last_delay: Duration,
}

impl StepWorker for SimulatedWorker {
    fn plan_delay(&mut self, _node_id: &str) -> Duration {
        self.last_delay = Duration::from_millis(rand::rng().random_range(1000..3000));
        self.last_delay
    }

    fn produce(&mut self, node_id: &str, _input: &Value) -> Result<Value, StepError> {
        Ok(json!({
            "result": format!("processed {node_id}"),
            "processingMs": self.last_delay.as_millis() as u64,
        }))
    }
}
