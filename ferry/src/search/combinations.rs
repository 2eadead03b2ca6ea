use crate::passenger::Passenger;

/// Every non-empty subset of `passengers` whose total weight fits `capacity`
///
/// Subsets are produced once each, ordered by their lowest index and built by
/// including later passengers while the remaining budget allows. A capacity of
/// zero yields nothing, and the empty load is never yielded.
pub fn feasible_loads<'a>(passengers: &[&'a Passenger], capacity: u32) -> Vec<Vec<&'a Passenger>> {
    let mut loads = Vec::new();
    if capacity == 0 {
        return loads;
    }
    let mut current = Vec::new();
    extend_loads(passengers, capacity, &mut current, &mut loads);
    loads
}

fn extend_loads<'a>(
    passengers: &[&'a Passenger],
    budget: u32,
    current: &mut Vec<&'a Passenger>,
    loads: &mut Vec<Vec<&'a Passenger>>,
) {
    for (index, passenger) in passengers.iter().enumerate() {
        if passenger.weight > budget {
            continue;
        }
        current.push(passenger);
        loads.push(current.clone());
        extend_loads(
            &passengers[index + 1..],
            budget - passenger.weight,
            current,
            loads,
        );
        current.pop();
    }
}
