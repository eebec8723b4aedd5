use yens_ksp::data_structures::{CandidatePool, FrontierQueue};
use ordered_float::OrderedFloat;

#[test]
fn test_frontier_queue_orders_by_distance_then_vertex() {
    let mut queue: FrontierQueue<OrderedFloat<f64>> = FrontierQueue::new();
    queue.push(7, OrderedFloat(2.0));
    queue.push(3, OrderedFloat(2.0));
    queue.push(9, OrderedFloat(1.0));

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some((9, OrderedFloat(1.0))));
    assert_eq!(queue.pop(), Some((9, OrderedFloat(1.0))));
    assert_eq!(queue.pop(), Some((3, OrderedFloat(2.0))));
    assert_eq!(queue.pop(), Some((7, OrderedFloat(2.0))));
    assert!(queue.is_empty());
}

#[test]
fn test_candidate_pool_pops_cheapest_then_oldest() {
    let mut pool = CandidatePool::new();
    assert!(pool.push(vec![0, 3, 4], OrderedFloat(6.0)));
    assert!(pool.push(vec![0, 2, 4], OrderedFloat(5.0)));
    assert!(pool.push(vec![0, 1, 4], OrderedFloat(5.0)));
    assert!(pool.push(vec![0, 4], OrderedFloat(9.0)));

    assert_eq!(pool.len(), 4);
    assert_eq!(pool.pop(), Some((vec![0, 2, 4], OrderedFloat(5.0))));
    assert_eq!(pool.pop(), Some((vec![0, 1, 4], OrderedFloat(5.0))));
    assert_eq!(pool.pop(), Some((vec![0, 3, 4], OrderedFloat(6.0))));
    assert_eq!(pool.pop(), Some((vec![0, 4], OrderedFloat(9.0))));
    assert_eq!(pool.pop(), None);
    assert!(pool.is_empty());
}

#[test]
fn test_candidate_pool_rejects_known_paths() {
    let mut pool = CandidatePool::new();
    assert!(pool.mark_seen(&[0, 1, 2]));
    assert!(!pool.mark_seen(&[0, 1, 2]));

    assert!(!pool.push(vec![0, 1, 2], OrderedFloat(1.0)), "already accepted");
    assert!(pool.push(vec![0, 2], OrderedFloat(3.0)));
    assert!(!pool.push(vec![0, 2], OrderedFloat(3.0)), "already queued");

    // Popping does not forget a path
    assert_eq!(pool.pop(), Some((vec![0, 2], OrderedFloat(3.0))));
    assert!(pool.contains(&[0, 2]));
    assert!(!pool.push(vec![0, 2], OrderedFloat(3.0)));
    assert!(pool.is_empty());
}
