use datavary_engine::{DataSpec, GeneratorEntry, TestGroup};
use datavary_registry::base_data_types;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = base_data_types(0);
    let spec = DataSpec::new()
        .field("postName", "title")
        .field("likeCount", "integer")
        .field("username", GeneratorEntry::new(["sample-username"]));

    let group = TestGroup::register(&registry, spec)?;
    let plan = group.plan("has title", &["postName", "likeCount"])?;
    for case in plan.cases() {
        println!("{} [{}] {}", case.name, case.pass, case.variation.to_json());
    }
    Ok(())
}
