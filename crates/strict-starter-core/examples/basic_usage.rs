//! Example: outcomes, validation, delay and retry with backoff
//!
//! Run with:
//! ```bash
//! cargo run -p strict-starter-core --example basic_usage --features trace
//! ```
//!
//! Set `STARTER_DEBUG=1` to see the retry loop's debug logs.

use std::error::Error;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;
use strict_starter_core::prelude::*;
use strict_starter_core::telemetry;

/// A simulated service that fails the first few calls
struct UnreliableService {
    attempts: AtomicU32,
    fail_count: u32,
}

impl UnreliableService {
    fn new(fail_count: u32) -> Self {
        Self {
            attempts: AtomicU32::new(0),
            fail_count,
        }
    }

    async fn call(&self) -> Result<String, std::io::Error> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        if attempt <= self.fail_count {
            println!("  Attempt {}: FAILED", attempt);
            Err(std::io::Error::other(format!("transient error on attempt {}", attempt)))
        } else {
            println!("  Attempt {}: SUCCESS", attempt);
            Ok("service response".to_string())
        }
    }
}

fn demonstrate_values() {
    println!("\n=== Outcomes and validation ===\n");

    for input in ["valid string", "   "] {
        println!("is_not_empty({:?}) = {}", input, is_not_empty(input));
    }

    let ok = success_result(serde_json::json!({ "message": "Success!" }));
    let failed: Outcome<String> = error_result("Error occurred");
    println!("Success outcome: {}", serde_json::to_string(&ok).unwrap_or_default());
    println!("Error outcome:   {}", serde_json::to_string(&failed).unwrap_or_default());
}

async fn demonstrate_async(config: &ConfigOptions) -> Result<(), Box<dyn Error>> {
    println!("\n=== Delay ===\n");
    let start = Instant::now();
    delay(250).await;
    println!("Delayed for {:?}", start.elapsed());

    println!("\n=== Retry with backoff ===\n");
    let service = UnreliableService::new(2);
    let start = Instant::now();

    let response = retry_with_backoff(|| service.call(), config.retries, 100).await?;

    println!("\nResult: {}", response);
    println!("Total time: {:?} (expected ~300ms: 100ms + 200ms)", start.elapsed());

    println!("\nAlways failing, 2 retries:");
    let broken = UnreliableService::new(u32::MAX);
    let outcome: Outcome<String> = retry_with_backoff(|| broken.call(), 2, 50).await.into();
    println!("Outcome: {:?}", outcome);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ConfigOptions::from_env()?;
    telemetry::init(&config)?;

    println!("==============================================");
    println!("   strict-starter-core: basic usage");
    println!("==============================================");

    demonstrate_values();
    demonstrate_async(&config).await?;

    println!("\n=== Example completed successfully ===\n");
    Ok(())
}
