#![no_main]

use faraid::{calculate, CalculationInputBuilder, HeirCategory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let tirkah = u64::from_le_bytes({
        let mut buf = [0u8; 8];
        let n = data.len().min(8);
        buf[..n].copy_from_slice(&data[..n]);
        buf
    })
    .max(1);

    let mut builder = CalculationInputBuilder::new(tirkah);
    for chunk in data[1..].chunks(2) {
        let id_byte = chunk[0];
        let qty_byte = *chunk.get(1).unwrap_or(&1);
        let Ok(category) = HeirCategory::from_id((id_byte % 25) + 1) else {
            continue;
        };
        let quantity = (qty_byte % 8) as u32 + 1;
        builder = builder.with_heir(category, quantity);
    }

    // Should never panic: either a well-formed result or a typed Error.
    if let Ok(input) = builder.build() {
        let _ = calculate(&input);
    }
});
