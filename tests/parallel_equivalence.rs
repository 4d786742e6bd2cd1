#![cfg(feature = "parallel")]

use dp_align::assembly::{merge_ordered, order_fragments, place_fragment};
use dp_align::{Assembler, CostModel};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn serial_assemble(template: &[u8], fragments: &[Vec<u8>], costs: &CostModel) -> Vec<u8> {
    let mut placed: Vec<_> = fragments
        .iter()
        .enumerate()
        .map(|(i, f)| place_fragment(template, f, costs, i).unwrap())
        .collect();
    order_fragments(&mut placed);
    merge_ordered::<u8, _, _>(placed.iter().map(|f| f.sequence.as_slice()))
}

fn shred(rng: &mut StdRng, template: &[u8], count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..=12).min(template.len());
            let start = rng.gen_range(0..=template.len() - len);
            template[start..start + len].to_vec()
        })
        .collect()
}

#[test]
fn parallel_assembly_matches_serial_on_seeded_input() {
    let mut rng = StdRng::seed_from_u64(2024);
    let template = random_dna(&mut rng, 200);
    let fragments = shred(&mut rng, &template, 64);
    let costs = CostModel::smith_waterman();

    let assembly = Assembler::default().assemble(&template, &fragments).unwrap();
    assert_eq!(assembly.consensus, serial_assemble(&template, &fragments, &costs));

    let indices: Vec<_> = assembly.fragments.iter().map(|f| f.index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..fragments.len()).collect::<Vec<_>>());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_equals_serial(seed in any::<u64>(), count in 1usize..24) {
        let mut rng = StdRng::seed_from_u64(seed);
        let template = random_dna(&mut rng, 60);
        let fragments = shred(&mut rng, &template, count);
        let costs = CostModel::smith_waterman();
        let parallel = Assembler::new(costs).unwrap().assemble(&template, &fragments).unwrap();
        prop_assert_eq!(parallel.consensus, serial_assemble(&template, &fragments, &costs));
    }
}
