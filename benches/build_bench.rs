use criterion::{criterion_group, criterion_main, Criterion};

use rfml::text::format_step;
use rfml::{SiteConfig, TestRegistry, TestSettings};

// Run with:
//    cargo bench

/// Bench: build the bundled demo suite
fn bench_build_demo(c: &mut Criterion) {
    let suite = rfml::demo::suite();
    c.bench_function("build_demo_suite", |b| {
        b.iter(|| {
            let registry = suite.build::<&str>(SiteConfig::default(), &[]).unwrap();
            assert!(registry.is_successful());
        })
    });
}

/// Bench: register and render a test with many steps
fn bench_register_and_render(c: &mut Criterion) {
    let config = SiteConfig::default().with_site("login", "1");
    c.bench_function("register_and_render_100_steps", |b| {
        b.iter(|| {
            let mut registry = TestRegistry::new(config.clone());
            let test = registry
                .register("bench", TestSettings::new().tags(["login"]), |t| {
                    for i in 0..100 {
                        t.step(&format!(
                            "Click on item {} in   the list.\n   Q: Do you see {{{{images/item{}.png}}}}?",
                            i, i
                        ));
                    }
                    Ok(())
                })
                .unwrap();
            test.to_rfml()
        })
    });
}

fn bench_format_step(c: &mut Criterion) {
    let text = "  Enter \"{{random.email}}\" as the username\n      and open {{docs/guide.pdf}}   then wait.  ";
    c.bench_function("format_step", |b| b.iter(|| format_step(text)));
}

criterion_group!(benches, bench_build_demo, bench_register_and_render, bench_format_step);
criterion_main!(benches);
