use shadow_rs::ShadowBuilder;

// Build metadata behind `azkar --version` and the health endpoint version.
fn main() {
    if let Err(e) = ShadowBuilder::builder().build() {
        panic!("shadow-rs could not generate build metadata: {}", e);
    }
}
