//! Unit tests for ld-dispatch.

#[cfg(test)]
mod helpers {
    use ld_core::{ElevatorId, Passenger, PassengerRequest, Tick};
    use ld_elevator::Elevator;

    /// Two elevators serving floors 1–10 and 11–20, capacity 4.
    pub fn two_zone_fleet() -> Vec<Elevator> {
        vec![
            Elevator::new(ElevatorId(1), 1, 10, 4),
            Elevator::new(ElevatorId(2), 11, 20, 4),
        ]
    }

    pub fn passenger(id: &str, source: i32, dest: i32) -> Passenger {
        Passenger::from_request(&PassengerRequest::new(0, id, source, dest))
    }

    pub fn assigned(id: &str, source: i32, dest: i32, to: u32) -> Passenger {
        let mut p = passenger(id, source, dest);
        p.assign(ElevatorId(to), Tick(0));
        p
    }
}

#[cfg(test)]
mod load_tests {
    use ld_core::ElevatorId;

    use super::helpers::{assigned, passenger};
    use crate::PendingLoads;

    #[test]
    fn tally_counts_only_assigned() {
        let waiting = [
            assigned("a", 1, 5, 1),
            assigned("b", 2, 5, 1),
            assigned("c", 12, 3, 2),
            passenger("d", 4, 9),
        ];
        let loads = PendingLoads::tally(waiting.iter());
        assert_eq!(loads.get(ElevatorId(1)), 2);
        assert_eq!(loads.get(ElevatorId(2)), 1);
        assert_eq!(loads.get(ElevatorId(3)), 0);
    }
}

#[cfg(test)]
mod partition_tests {
    use ld_core::ZoneLabel;

    use super::helpers::two_zone_fleet;
    use crate::fleet_partition;

    #[test]
    fn one_zone_per_elevator_over_fleet_span() {
        let mut fleet = two_zone_fleet();
        let zones = fleet_partition(&fleet);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones.zone_of(10), Some(ZoneLabel(1)));
        assert_eq!(zones.zone_of(11), Some(ZoneLabel(2)));

        // Widening a zone shifts the partition boundary.
        fleet[1].zone_end = 30;
        let zones = fleet_partition(&fleet);
        assert_eq!(zones.zone_of(15), Some(ZoneLabel(1)));
        assert_eq!(zones.zone_of(16), Some(ZoneLabel(2)));
    }

    #[test]
    fn empty_fleet_has_no_zones() {
        assert!(fleet_partition(&[]).is_empty());
    }
}

#[cfg(test)]
mod assign_tests {
    use ld_core::{Direction, ElevatorId, EventLog, PassengerIdx, Tick};
    use ld_elevator::ElevatorState;

    use super::helpers::{assigned, passenger, two_zone_fleet};
    use crate::{Dispatcher, PendingLoads};

    #[test]
    fn nearest_idle_elevator_wins() {
        let fleet = two_zone_fleet();
        let d = Dispatcher::new();
        let loads = PendingLoads::new();
        assert_eq!(d.best_elevator(&passenger("a", 2, 9), &loads, &fleet), Some(ElevatorId(1)));
        assert_eq!(d.best_elevator(&passenger("b", 12, 19), &loads, &fleet), Some(ElevatorId(2)));
    }

    #[test]
    fn ties_keep_fleet_order() {
        let mut fleet = two_zone_fleet();
        fleet[0].current_floor = 4;
        fleet[1].current_floor = 8;
        let d = Dispatcher::new();
        assert_eq!(
            d.best_elevator(&passenger("a", 6, 1), &PendingLoads::new(), &fleet),
            Some(ElevatorId(1))
        );
    }

    #[test]
    fn pending_waiters_count_against_capacity() {
        let mut fleet = two_zone_fleet();
        fleet[0].capacity = 2;
        fleet[0].onboard.push(PassengerIdx(7));
        let waiting = [assigned("w", 3, 8, 1)];
        let loads = PendingLoads::tally(waiting.iter());

        // Elevator 1 is closer but 1 rider + 1 waiter fills its 2 seats.
        let d = Dispatcher::new();
        assert_eq!(
            d.best_elevator(&passenger("a", 2, 9), &loads, &fleet),
            Some(ElevatorId(2))
        );
    }

    #[test]
    fn loading_and_dropping_off_are_never_eligible() {
        let mut fleet = two_zone_fleet();
        fleet[0].state = ElevatorState::Loading;
        fleet[1].state = ElevatorState::DroppingOff;
        let d = Dispatcher::new();
        assert_eq!(d.best_elevator(&passenger("a", 2, 9), &PendingLoads::new(), &fleet), None);
    }

    #[test]
    fn moving_up_accepts_trip_in_same_zones() {
        let mut fleet = two_zone_fleet();
        fleet[0].update_route(5, 9);
        fleet[1].state = ElevatorState::Loading;
        let d = Dispatcher::new();
        // dest 7 and source 3 share zone1 with max(dest)=9 and max(pickups)=5.
        assert_eq!(
            d.best_elevator(&passenger("a", 3, 7), &PendingLoads::new(), &fleet),
            Some(ElevatorId(1))
        );
    }

    #[test]
    fn moving_up_rejects_destination_in_other_zone() {
        let mut fleet = two_zone_fleet();
        fleet[0].update_route(5, 9);
        fleet[1].state = ElevatorState::Loading;
        let d = Dispatcher::new();
        assert_eq!(d.best_elevator(&passenger("a", 3, 15), &PendingLoads::new(), &fleet), None);
    }

    #[test]
    fn moving_up_rejects_source_outside_pickup_zone() {
        let mut fleet = two_zone_fleet();
        fleet[0].update_route(5, 9);
        fleet[1].state = ElevatorState::Loading;
        let d = Dispatcher::new();
        assert_eq!(d.best_elevator(&passenger("a", 14, 8), &PendingLoads::new(), &fleet), None);
    }

    #[test]
    fn moving_down_compares_lowest_destination_and_lowest_pickup() {
        let mut fleet = two_zone_fleet();
        // Elevator 2 at 20 heading down: pickups {18, 12}, destinations {15, 11}.
        fleet[1].current_floor = 20;
        fleet[1].update_route(18, 15);
        fleet[1].update_route(12, 11);
        assert_eq!(fleet[1].direction, Some(Direction::Down));
        fleet[0].state = ElevatorState::DroppingOff;

        let d = Dispatcher::new();
        let loads = PendingLoads::new();
        // min(dest)=11 and min(pickups)=12 both sit in zone2.
        assert_eq!(d.best_elevator(&passenger("a", 16, 13), &loads, &fleet), Some(ElevatorId(2)));
        // Destination in zone1 conflicts with the committed route.
        assert_eq!(d.best_elevator(&passenger("b", 16, 4), &loads, &fleet), None);
    }

    #[test]
    fn moving_without_pickups_checks_destination_only() {
        let mut fleet = two_zone_fleet();
        fleet[0].update_route(5, 9);
        fleet[0].pickups.remove(5);
        fleet[1].state = ElevatorState::Loading;
        let d = Dispatcher::new();
        assert_eq!(
            d.best_elevator(&passenger("a", 18, 2), &PendingLoads::new(), &fleet),
            Some(ElevatorId(1))
        );
    }

    #[test]
    fn failure_is_reported_once_per_passenger() {
        let mut fleet = two_zone_fleet();
        fleet[0].state = ElevatorState::Loading;
        fleet[1].state = ElevatorState::Loading;
        let d = Dispatcher::new();
        let mut log = EventLog::new();
        let mut p = passenger("a", 2, 9);

        for t in 0..3 {
            assert_eq!(d.assign(&mut p, &PendingLoads::new(), &fleet, Tick(t), &mut log), None);
        }
        assert!(p.unassignable_reported);
        assert_eq!(log.of_kind("no_elevator").count(), 1);
        assert_eq!(log.events[0].tick(), Tick(0));
    }

    #[test]
    fn success_emits_nothing() {
        let fleet = two_zone_fleet();
        let d = Dispatcher::new();
        let mut log = EventLog::new();
        let mut p = passenger("a", 2, 9);
        assert_eq!(
            d.assign(&mut p, &PendingLoads::new(), &fleet, Tick(0), &mut log),
            Some(ElevatorId(1))
        );
        assert!(log.is_empty());
    }
}
