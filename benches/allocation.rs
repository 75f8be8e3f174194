use criterion::{black_box, criterion_group, criterion_main, Criterion};

use raidplanner::data::default_skill_catalog;
use raidplanner::progression::SkillPlanner;

fn bench_node_states(c: &mut Criterion) {
    let mut planner = SkillPlanner::new(default_skill_catalog(), 20);
    for id in ["core_systems", "def_up", "atk_up", "atk_t2_crit"] {
        let _ = planner.toggle(id);
    }
    let ids: Vec<String> = planner.catalog().nodes().iter().map(|n| n.id.clone()).collect();

    c.bench_function("node_state all nodes", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(planner.node_state(id));
            }
        })
    });
}

fn bench_toggle_cycle(c: &mut Criterion) {
    c.bench_function("unlock and relearn chain", |b| {
        let mut planner = SkillPlanner::new(default_skill_catalog(), 20);
        let chain = ["core_systems", "atk_up", "atk_t2_crit", "atk_util_t3", "ultimate_stealth"];
        b.iter(|| {
            for id in chain {
                let _ = black_box(planner.toggle(id));
            }
            for id in chain.iter().rev() {
                let _ = black_box(planner.toggle(id));
            }
        })
    });
}

criterion_group!(benches, bench_node_states, bench_toggle_cycle);
criterion_main!(benches);
