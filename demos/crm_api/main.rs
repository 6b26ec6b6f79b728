//! CRM search API example
//!
//! This example demonstrates:
//! - Registering several searchable entities (persons, contacts, deals, activities)
//! - Filtering with the compact `key<op>value` syntax
//! - Enumerated fields (activity type, gender)
//! - Multi-tenant isolation through the `X-Tenant-ID` header
//! - Optional YAML configuration (`CRM_SEARCH_CONFIG=demos/crm_api/search.yaml`)

use crm::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const ACME: TenantId = 1;
const GLOBEX: TenantId = 2;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,crm=debug")),
        )
        .init();

    println!("🚀 CRM Search API Example");
    println!("=========================\n");

    let config = match std::env::var("CRM_SEARCH_CONFIG") {
        Ok(path) => {
            let config = SearchConfig::from_yaml_file(&path)?;
            println!("✅ Loaded configuration from {}", path);
            println!("   - {} schema overrides\n", config.entities.len());
            config
        }
        Err(_) => SearchConfig::default_config(),
    };

    let persons = Arc::new(InMemoryRepository::<Person>::new());
    let contacts = Arc::new(InMemoryRepository::<Contact>::new());
    let deals = Arc::new(InMemoryRepository::<Deal>::new());
    let activities = Arc::new(InMemoryRepository::<Activity>::new());

    println!("📋 Setting up test data...");

    let john = persons
        .save(
            Person::new(ACME, "John Smith")
                .with_title("CTO")
                .with_email("john@acme.test")
                .with_organization(10),
        )
        .await?;
    persons
        .save(Person::new(ACME, "Jane Doe").with_email("jane@acme.test"))
        .await?;
    persons
        .save(Person::new(GLOBEX, "John Globex").with_organization(20))
        .await?;
    println!("   ✓ 3 persons (2 for tenant {}, 1 for tenant {})", ACME, GLOBEX);

    contacts
        .save(Contact::new(ACME, "Alex Turner").with_gender(Gender::Male))
        .await?;
    contacts
        .save(Contact::new(ACME, "Maria Lopez").with_gender(Gender::Female))
        .await?;
    println!("   ✓ 2 contacts");

    let renewal = deals
        .save(
            Deal::new(ACME, "Enterprise renewal", 3, 7)
                .with_person(john.id)
                .with_value(120_000.0, "EUR"),
        )
        .await?;
    deals.save(Deal::new(ACME, "Pilot project", 1, 2)).await?;
    deals.save(Deal::new(GLOBEX, "Globex expansion", 2, 5)).await?;
    println!("   ✓ 3 deals");

    activities
        .save(Activity::new(ACME, "Kick-off call", ActivityType::Call).for_deal(renewal.id))
        .await?;
    activities
        .save(Activity::new(ACME, "Contract lunch", ActivityType::Lunch).for_deal(renewal.id))
        .await?;
    activities
        .save(Activity::new(GLOBEX, "Quarterly review", ActivityType::Meeting))
        .await?;
    println!("   ✓ 3 activities\n");

    let addr = "127.0.0.1:3000";
    println!("🌐 Server starting on http://{}\n", addr);

    println!("📖 Available endpoints:");
    println!("   GET /entities                     - Searchable entities and their fields");
    println!("   GET /{{plural}}/search?filter=...   - Search with a filter");
    println!("   GET /{{plural}}/{{id}}               - Get one record");
    println!();

    println!("💡 Example requests:");
    println!("   # Persons whose name contains 'John'");
    println!(
        "   curl -H 'X-Tenant-ID: {}' 'http://{}/persons/search?filter=name:John'",
        ACME, addr
    );
    println!("   # Deals further down the pipeline");
    println!(
        "   curl -H 'X-Tenant-ID: {}' 'http://{}/deals/search?filter=order>5'",
        ACME, addr
    );
    println!("   # Calls attached to a deal");
    println!(
        "   curl -H 'X-Tenant-ID: {}' 'http://{}/activities/search?filter=type:CALL,deal:{}'",
        ACME, addr, renewal.id
    );
    println!("   # Rejected filter (400)");
    println!(
        "   curl -H 'X-Tenant-ID: {}' 'http://{}/contacts/search?filter=gender:OTHER'",
        ACME, addr
    );
    println!();

    ServerBuilder::new()
        .with_config(config)
        .register_repository::<Person>(persons)
        .register_repository::<Contact>(contacts)
        .register_repository::<Deal>(deals)
        .register_repository::<Activity>(activities)
        .serve(addr)
        .await
}
