use LinkedQueueMini::core::buildcore::{QueueConfig, RecordedQueue, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Optional JSON config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => QueueConfig::load(path)?,
        None => QueueConfig::default(),
    };

    let mut fruit = RecordedQueue::new(&config);
    for item in ["banana", "apple", "cherry"] {
        fruit.push_back(item)?;
    }
    fruit.sort();
    info!(queue = ?fruit.queue(), "sorted");
    fruit.reverse();
    info!(queue = ?fruit.queue(), "reversed");

    let mut buf = [0u8; 4];
    if fruit.pop_front_into(Some(&mut buf)) {
        info!(popped = ?buf, size = fruit.size(), "popped into 4-byte buffer");
    }

    let mut empty = RecordedQueue::new(&config);
    if empty.pop_front().is_none() {
        info!(size = empty.size(), "nothing to pop");
    }

    // Append the logs for both queues as NDJSON
    fruit.append_logs_to(&config.log_path)?;
    empty.append_logs_to(&config.log_path)?;
    Ok(())
}
