//! # Tally CLI
//!
//! Composition root for Tally: builds exactly one member store and one
//! discount policy, injects both into one [`OrderService`], registers a
//! member and prices an order.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PricingConfig::load()  ──► policy settings, log filter                 │
//! │  Cli::parse()           ──► member, item, price, seed file              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryMemberStore (empty or seeded)   PolicySettings::build()          │
//! │       └────────────────┬───────────────────────┘                        │
//! │                        ▼                                                │
//! │               OrderService::new(store, policy)                          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │           save(member) → create_order → render                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tally_core::validation::validate_member_name;
use tally_core::{CoreError, Grade, Member, MemberId, MemberStore, Money, Order, OrderService};
use tally_store::{MemoryMemberStore, StoreError};
use tracing::{debug, info};

use crate::config::{ConfigError, PricingConfig};

// =============================================================================
// Command Line
// =============================================================================

/// Price an order for a member.
#[derive(Debug, Clone, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// ID of the ordering member
    #[arg(long, default_value_t = 1)]
    pub member_id: i64,

    /// Name of the member to register
    #[arg(long, default_value = "memberA", conflicts_with = "members")]
    pub member_name: String,

    /// Grade of the member to register (BASIC or VIP)
    #[arg(long, default_value = "VIP", conflicts_with = "members")]
    pub grade: Grade,

    /// Item being ordered
    #[arg(long, default_value = "itemA")]
    pub item: String,

    /// Base price in the smallest unit
    #[arg(long, default_value_t = 10000, allow_negative_numbers = true)]
    pub price: i64,

    /// JSON member seed; replaces --member-name / --grade registration
    #[arg(long)]
    pub members: Option<PathBuf>,

    /// Print the order as JSON
    #[arg(long)]
    pub json: bool,
}

// =============================================================================
// Errors
// =============================================================================

/// Anything that stops the CLI from producing an order.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot render order: {0}")]
    Render(#[from] serde_json::Error),
}

// =============================================================================
// Wiring
// =============================================================================

/// Builds the store, seeded from `cli.members` when present.
pub fn build_store(cli: &Cli) -> Result<Arc<MemoryMemberStore>, AppError> {
    let store = match &cli.members {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| AppError::Io {
                path: path.clone(),
                source,
            })?;
            MemoryMemberStore::from_json(&json)?
        }
        None => MemoryMemberStore::new(),
    };
    info!(members = store.count(), "Member store ready");
    Ok(Arc::new(store))
}

/// Wires the components together and prices one order.
pub fn run(config: &PricingConfig, cli: &Cli) -> Result<Order, AppError> {
    let store = build_store(cli)?;
    let policy = config.policy.build()?;
    let service = OrderService::new(store.clone(), policy);
    info!(policy = service.policy_name(), "Order service ready");

    let member_id = MemberId::from(cli.member_id);
    if cli.members.is_none() {
        validate_member_name(&cli.member_name).map_err(CoreError::from)?;
        store.save(Member::new(member_id, cli.member_name.trim(), cli.grade));
        debug!(member_id = %member_id, grade = %cli.grade, "Registered member");
    }

    let order = service.create_order(member_id, &cli.item, Money::from_cents(cli.price))?;
    info!(
        order_id = %order.id(),
        member_id = %order.member_id(),
        final_price = %order.final_price(),
        "Order created"
    );
    Ok(order)
}

/// Renders an order for a human, or as JSON.
pub fn render(order: &Order, json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(order)?);
    }
    Ok(format!(
        "order = {}\norder.final_price = {}",
        order,
        order.final_price()
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tally_core::{PolicyKind, PolicySettings};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["tally"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_run_prices_vip_order() {
        let order = run(&PricingConfig::default(), &cli(&[])).unwrap();
        assert_eq!(order.member_id(), MemberId::new(1));
        assert_eq!(order.item_name(), "itemA");
        assert_eq!(order.discount_price().cents(), 1000);
        assert_eq!(order.final_price().cents(), 9000);
    }

    #[test]
    fn test_basic_member_run() {
        let args = cli(&[
            "--member-id", "2", "--member-name", "memberB", "--grade", "basic", "--item",
            "itemB", "--price", "5000",
        ]);
        let order = run(&PricingConfig::default(), &args).unwrap();
        assert!(order.discount_price().is_zero());
        assert_eq!(order.final_price().cents(), 5000);
    }

    #[test]
    fn test_fixed_policy_from_config() {
        let config = PricingConfig {
            policy: PolicySettings {
                kind: PolicyKind::Fixed,
                vip_fixed_amount: Money::from_cents(2500),
                ..PolicySettings::default()
            },
            ..PricingConfig::default()
        };
        let order = run(&config, &cli(&[])).unwrap();
        assert_eq!(order.discount_price().cents(), 2500);
    }

    #[test]
    fn test_negative_price_is_invalid_amount() {
        let err = run(&PricingConfig::default(), &cli(&["--price", "-10"])).unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::InvalidAmount { cents: -10, .. })
        ));
    }

    #[test]
    fn test_member_flags_conflict_with_seed_file() {
        let err = Cli::try_parse_from(["tally", "--members", "m.json", "--grade", "BASIC"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let err = Cli::try_parse_from(["tally", "--members", "m.json", "--member-name", "x"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        // Defaults alone do not conflict
        let args = Cli::try_parse_from(["tally", "--members", "m.json"]).unwrap();
        assert_eq!(args.members.as_deref(), Some(std::path::Path::new("m.json")));
    }

    #[test]
    fn test_unknown_grade_rejected_by_parser() {
        assert!(Cli::try_parse_from(["tally", "--grade", "gold"]).is_err());
    }

    #[test]
    fn test_seeded_store_without_member_is_not_found() {
        let dir = std::env::temp_dir().join(format!("tally-seed-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("members.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"[{"id": 2, "name": "memberB", "grade": "BASIC"}]"#)
            .unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let err = run(
            &PricingConfig::default(),
            &cli(&["--members", path_arg.as_str(), "--member-id", "99"]),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::MemberNotFound(_))));

        let order = run(
            &PricingConfig::default(),
            &cli(&["--members", path_arg.as_str(), "--member-id", "2", "--price", "5000"]),
        )
        .unwrap();
        assert_eq!(order.final_price().cents(), 5000);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_seed_file_is_io_error() {
        let err = run(
            &PricingConfig::default(),
            &cli(&["--members", "/nonexistent/tally/members.json"]),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn test_render_text_and_json() {
        let order = run(&PricingConfig::default(), &cli(&[])).unwrap();

        let text = render(&order, false).unwrap();
        assert!(text.ends_with("order.final_price = 9000"));

        let json: serde_json::Value = serde_json::from_str(&render(&order, true).unwrap()).unwrap();
        assert_eq!(json["final_price"], 9000);
    }
}
