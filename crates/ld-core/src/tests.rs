//! Unit tests for ld-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, PassengerId, PassengerIdx};

    #[test]
    fn index_roundtrip() {
        let idx = PassengerIdx(42);
        assert_eq!(idx.index(), 42);
        assert_eq!(PassengerIdx::try_from(42usize).unwrap(), idx);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(3).to_string(), "3");
        assert_eq!(PassengerId::from("p7").to_string(), "p7");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15).since(Tick(10)), Some(5));
        assert_eq!(Tick(10).since(Tick(15)), None);
    }

    #[test]
    fn end_tick_is_budget() {
        let cfg = SimConfig { max_ticks: 100, capacity: 4 };
        assert_eq!(cfg.end_tick(), Tick(100));
    }
}

#[cfg(test)]
mod floor {
    use crate::{Direction, step_toward};

    #[test]
    fn toward_treats_same_floor_as_up() {
        assert_eq!(Direction::toward(5, 5), Direction::Up);
        assert_eq!(Direction::toward(5, 9), Direction::Up);
        assert_eq!(Direction::toward(5, 1), Direction::Down);
    }

    #[test]
    fn toward_all_requires_strictly_below_every_target() {
        assert_eq!(Direction::toward_all(3, [4, 8]), Direction::Up);
        assert_eq!(Direction::toward_all(4, [4, 8]), Direction::Down);
        assert_eq!(Direction::toward_all(9, [4, 8]), Direction::Down);
        assert_eq!(Direction::toward_all(9, [0; 0]), Direction::Up);
    }

    #[test]
    fn step_toward_moves_one_floor() {
        let mut f = 3;
        assert!(step_toward(&mut f, 5));
        assert_eq!(f, 4);
        assert!(step_toward(&mut f, 1));
        assert_eq!(f, 3);
        assert!(!step_toward(&mut f, 3));
        assert_eq!(f, 3);
    }
}

#[cfg(test)]
mod passenger {
    use crate::{ElevatorId, Passenger, PassengerRequest, Tick};

    #[test]
    fn lifecycle_fields_start_unset() {
        let p = Passenger::from_request(&PassengerRequest::new(3, "p1", 1, 9));
        assert_eq!(p.arrival, Tick(3));
        assert!(!p.is_assigned());
        assert!(!p.has_exited());
        assert_eq!(p.board_time, None);
        assert_eq!(p.to_string(), "Passenger p1 (1->9)");
    }

    #[test]
    fn assign_records_elevator_and_tick() {
        let mut p = Passenger::from_request(&PassengerRequest::new(0, "p1", 1, 9));
        p.assign(ElevatorId(2), Tick(4));
        assert!(p.is_assigned_to(ElevatorId(2)));
        assert!(!p.is_assigned_to(ElevatorId(1)));
        assert_eq!(p.assigned_at, Some(Tick(4)));
    }
}

#[cfg(test)]
mod zones {
    use proptest::prelude::*;

    use crate::{ZoneLabel, create_zones, find_zone};

    #[test]
    fn three_even_zones() {
        let z = create_zones(1, 60, 3);
        assert_eq!(z.len(), 3);
        assert_eq!(find_zone(1, &z), Some(ZoneLabel(1)));
        assert_eq!(find_zone(20, &z), Some(ZoneLabel(1)));
        assert_eq!(find_zone(21, &z), Some(ZoneLabel(2)));
        assert_eq!(find_zone(60, &z), Some(ZoneLabel(3)));
        assert_eq!(find_zone(61, &z), None);
        assert_eq!(find_zone(0, &z), None);
    }

    #[test]
    fn last_zone_takes_remainder() {
        let z = create_zones(1, 10, 3);
        let ranges: Vec<_> = z.iter().map(|(_, r)| r.clone()).collect();
        assert_eq!(ranges, vec![1..4, 4..7, 7..11]);
    }

    #[test]
    fn top_floor_of_the_floor_type_is_covered() {
        let z = create_zones(i32::MAX - 9, i32::MAX, 2);
        assert_eq!(find_zone(i32::MAX, &z), Some(ZoneLabel(2)));
        assert_eq!(find_zone(i32::MAX - 9, &z), Some(ZoneLabel(1)));

        let whole = create_zones(i32::MIN, i32::MAX, 3);
        assert_eq!(find_zone(i32::MIN, &whole), Some(ZoneLabel(1)));
        assert_eq!(find_zone(0, &whole), Some(ZoneLabel(2)));
        assert_eq!(find_zone(i32::MAX, &whole), Some(ZoneLabel(3)));
    }

    #[test]
    fn more_zones_than_floors() {
        let z = create_zones(5, 6, 4);
        assert_eq!(z.len(), 4);
        assert_eq!(find_zone(5, &z), Some(ZoneLabel(4)));
        assert_eq!(find_zone(6, &z), Some(ZoneLabel(4)));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(create_zones(1, 10, 0).is_empty());
    }

    #[test]
    fn label_display() {
        assert_eq!(ZoneLabel(2).to_string(), "zone2");
    }

    /// Any `low <= high` with at most a few hundred floors, anchored
    /// anywhere in the floor type including both of its ends.
    fn bounds() -> impl Strategy<Value = (i32, i32)> {
        (0i64..200).prop_flat_map(|span| {
            let span = span as i32;
            prop_oneof![
                Just((i32::MIN, i32::MIN + span)),
                Just((i32::MAX - span, i32::MAX)),
                (i32::MIN..=i32::MAX - span).prop_map(move |low| (low, low + span)),
            ]
        })
    }

    proptest! {
        #[test]
        fn partition_covers_range_exactly(
            (low, high) in bounds(),
            count in 1usize..12,
        ) {
            let z = create_zones(low, high, count);
            prop_assert_eq!(z.len(), count);

            // Contiguous: each range starts where the previous one ended.
            let ranges: Vec<_> = z.iter().map(|(_, r)| r.clone()).collect();
            prop_assert_eq!(ranges[0].start, i64::from(low));
            prop_assert_eq!(ranges[count - 1].end, i64::from(high) + 1);
            for pair in ranges.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }

            // Every floor falls in exactly one zone.
            for floor in low..=high {
                let hits = ranges.iter().filter(|r| r.contains(&i64::from(floor))).count();
                prop_assert_eq!(hits, 1);
                prop_assert!(find_zone(floor, &z).is_some());
            }
        }
    }
}

#[cfg(test)]
mod event {
    use crate::{ElevatorId, EventLog, EventSink, PassengerId, SimEvent, Tick};

    fn boarded(tick: u64, p: &str) -> SimEvent {
        SimEvent::Boarded { tick: Tick(tick), passenger: PassengerId::from(p), elevator: ElevatorId(1) }
    }

    #[test]
    fn log_keeps_order_and_filters() {
        let mut log = EventLog::new();
        log.emit(boarded(1, "a"));
        log.emit(SimEvent::DroppedOff { tick: Tick(2), elevator: ElevatorId(1), floor: 4 });
        log.emit(boarded(3, "b"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.of_kind("boarded").count(), 2);
        let b: Vec<_> = log.for_passenger("b").collect();
        assert_eq!(b, vec![&boarded(3, "b")]);
    }

    #[test]
    fn accessors() {
        let e = SimEvent::Exited {
            tick:      Tick(10),
            passenger: PassengerId::from("p1"),
            elevator:  ElevatorId(1),
            floor:     10,
        };
        assert_eq!(e.kind(), "exited");
        assert_eq!(e.tick(), Tick(10));
        assert_eq!(e.floor(), Some(10));
        assert_eq!(e.elevator(), Some(ElevatorId(1)));
        assert_eq!(e.to_string(), "Time 10: Passenger p1 exited at floor 10");
    }

    #[test]
    fn mut_ref_forwards() {
        fn push<S: EventSink>(mut sink: S) {
            sink.emit(boarded(0, "a"));
        }
        let mut log = EventLog::new();
        push(&mut log);
        assert_eq!(log.len(), 1);
    }
}

#[cfg(test)]
mod fleet_tests {
    use crate::{ElevatorId, ElevatorSpec};

    #[test]
    fn home_floor_is_zone_start() {
        let spec = ElevatorSpec::new(3, 21, 40);
        assert_eq!(spec.id, ElevatorId(3));
        assert_eq!(spec.home_floor(), 21);
    }
}
