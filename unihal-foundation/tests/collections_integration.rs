// Integration test for the collections module
// Exercises the containers together through the public surface only

use unihal_error::Result;
use unihal_foundation::collections::{DynamicArray, IndexedRingBuffer, RingBuffer};

#[test]
fn test_dynamic_array_growth_scenario() -> Result<()> {
    let mut values = DynamicArray::with_capacity(4)?;

    for v in [10, 20, 30, 40, 50] {
        values.push(v)?;
    }

    // Five pushes into capacity 4 double it once.
    assert_eq!(values.capacity(), 8);
    assert_eq!(values.len(), 5);
    assert_eq!(values[4], 50);

    assert_eq!(values.remove(1)?, 20);
    assert_eq!(&values[..], &[10, 30, 40, 50]);

    values.shrink_to_fit()?;
    assert_eq!(values.capacity(), 4);

    Ok(())
}

#[test]
fn test_dynamic_array_erase_preserves_order() -> Result<()> {
    let mut values = DynamicArray::new();
    for v in 0..100_u32 {
        values.push(v)?;
    }

    // Delete one value by scanning, the way consumers drop a stale entry.
    let position = values.iter().position(|&v| v == 63);
    assert_eq!(position, Some(63));
    values.remove(63)?;

    assert_eq!(values.len(), 99);
    for (index, &v) in values.iter().enumerate() {
        let expected = if index < 63 { index } else { index + 1 };
        assert_eq!(v, expected as u32);
    }

    Ok(())
}

#[test]
fn test_ring_buffer_keeps_newest() {
    let mut ring = RingBuffer::<u32, 3>::new();

    for v in 1..=4 {
        ring.push(v);
    }

    assert!(ring.is_full());
    assert_eq!(ring.pop(), Some(2));
    assert_eq!(ring.len(), 2);
    assert_eq!(ring.peek(), Some(&3));
}

#[test]
fn test_indexed_ring_delete_scenario() -> Result<()> {
    // {10,20,30,40,50}: deleting tail offset 1 removes 20 and keeps order.
    let mut frames = IndexedRingBuffer::<u32, 5>::new();
    for v in [10, 20, 30, 40, 50] {
        frames.push(v);
    }

    frames.delete_from_tail(1)?;

    let remaining: Vec<u32> = frames.iter().copied().collect();
    assert_eq!(remaining, vec![10, 30, 40, 50]);

    Ok(())
}

#[test]
fn test_ring_drains_into_dynamic_array() -> Result<()> {
    // The CAN glue stages frames in a fixed ring and batches them into a
    // growable array once the loop gets around to it.
    let mut staging = IndexedRingBuffer::<u32, 8>::new();
    let mut batch = DynamicArray::new();

    for frame in 0..20_u32 {
        staging.push(frame);
        if staging.left_capacity() == 0 {
            while let Some(frame) = staging.pop() {
                batch.push(frame)?;
            }
        }
    }
    while let Some(frame) = staging.pop() {
        batch.push(frame)?;
    }

    assert_eq!(batch.len(), 20);
    for (index, &frame) in batch.iter().enumerate() {
        assert_eq!(frame, index as u32);
    }

    Ok(())
}

#[test]
fn test_indexed_ring_out_of_band_removal() -> Result<()> {
    // Remove an acknowledged frame from the middle while traffic keeps
    // arriving, then confirm FIFO order of the survivors.
    let mut frames = IndexedRingBuffer::<u32, 6>::new();
    for v in [100, 101, 102, 103] {
        frames.push(v);
    }

    assert!(frames.delete_element(&102));
    frames.push(104);
    frames.push_front(99);

    let drained: Vec<u32> = core::iter::from_fn(|| frames.pop()).collect();
    assert_eq!(drained, vec![99, 100, 101, 103, 104]);

    Ok(())
}
