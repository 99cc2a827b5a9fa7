#![no_main]

use libfuzzer_sys::fuzz_target;

use fueleu::domain::services::{allocate_pool, verify_allocation, ShipBalance};

fuzz_target!(|data: &[u8]| {
    let ships: Vec<ShipBalance> = data
        .chunks_exact(8)
        .take(64)
        .enumerate()
        .map(|(i, chunk)| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            ShipBalance::new(format!("S{i}"), f64::from_le_bytes(bytes))
        })
        .collect();

    // Any input is either rejected by a precondition or yields a verified allocation
    if let Ok(allocation) = allocate_pool("fuzz", &ships) {
        assert_eq!(allocation.members.len(), ships.len());
        assert!(verify_allocation(&allocation).is_ok());
    }
});
