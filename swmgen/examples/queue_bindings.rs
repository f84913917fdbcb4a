//! Resolves the bindings of the queue entity and prints them.
//!
//! Run with: `RUST_LOG=debug cargo run --example queue_bindings`

use swmgen::prelude::*;

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    validate_registry()?;

    let fields = vec![
        ("id", FieldShape::scalar("pos_integer()")),
        ("name", FieldShape::scalar("string()")),
        ("state", FieldShape::scalar("atom()")),
        ("jobs", FieldShape::list(FieldShape::scalar("job_id()"))),
        ("nodes", FieldShape::list(FieldShape::scalar("node_id()"))),
        ("hooks", FieldShape::list(FieldShape::scalar("hook_id()"))),
        ("priority", FieldShape::scalar("integer()")),
        ("resources", FieldShape::list(FieldShape::tuple(["atom()", "any()"]))),
        ("owner", FieldShape::record("#user{}")),
        ("revision", FieldShape::scalar("pos_integer()")),
    ];

    let entity = resolve_entity("queue", &fields)?;
    tracing::info!("Resolved {} fields for {}", entity.fields.len(), entity.class_name);

    println!("{} ({})", entity.class_name, entity.header);
    println!("  list decoder:    {}", entity.list_decoder);
    println!("  eterm converter: {}", entity.eterm_converter);
    for include in &entity.includes {
        println!("  includes:        {include}");
    }
    for field in &entity.fields {
        println!(
            "  {:<10} {:<34} {:<24} {}",
            field.name, field.storage, field.decoder, field.printer
        );
    }

    for name in ExclusionFilter::names() {
        if let Err(e) = resolve_entity(name, &fields) {
            println!("skipped: {e}");
        }
    }

    Ok(())
}
