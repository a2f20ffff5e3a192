//! Unit and scenario tests for cc-sim.

use cc_core::{CenterConfig, CustomerId, CustomerIds, SimRng, SimTime, DAY_HOURS, HOUR_SECS};
use cc_schedule::{ArrivalGenerator, StaffingScheduler};

use crate::{
    ActiveCustomer, Carryover, CompletedInteraction, Customer, CustomerState, DayDriver,
    DayObserver, HourSummary, MetricsCollector, NoopObserver, QueuedCustomer, RecordingObserver,
    ServiceStation, SimError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(hour: usize, secs: u64) -> SimTime {
    SimTime::hour_start(hour) + secs
}

fn arrival(id: u64, when: SimTime, service_secs: u64) -> Customer {
    Customer::new(CustomerId(id), when, service_secs)
}

fn waiting(id: u64, queued_at: SimTime, service_secs: u64) -> Customer {
    let mut c = Customer::new(CustomerId(id), queued_at, service_secs);
    c.enqueue(queued_at).unwrap();
    c
}

fn serving(id: u64, queued_at: SimTime, start: SimTime, service_secs: u64, served: u64) -> Customer {
    let mut c = waiting(id, queued_at, service_secs);
    c.start(start).unwrap();
    c.credit(served);
    c
}

fn carried_queue(customer: Customer, hour: usize) -> QueuedCustomer {
    let waited_secs = SimTime::hour_start(hour).since(customer.queued_at.unwrap());
    QueuedCustomer { customer, waited_secs }
}

fn reference_config() -> CenterConfig {
    CenterConfig::default()
}

/// Drive the public building blocks hour by hour, keeping every completed
/// interaction so day-wide properties can be checked.
fn simulate_completions(config: &CenterConfig) -> (Vec<CompletedInteraction>, u64, Carryover) {
    let mut staffing = StaffingScheduler::from_config(config);
    let generator = ArrivalGenerator::from_config(config);
    let mut rng = SimRng::new(config.seed);
    let mut ids = CustomerIds::new();
    let today = generator.interactions_today(&mut rng);
    let handle = config.handle_time_secs();

    let mut carryover = Carryover::default();
    let mut completed = Vec::new();
    let mut arrived = 0u64;
    for hour in 0..DAY_HOURS {
        let decision = staffing.staff_hour(hour).unwrap();
        let planned = generator.arrivals_for_hour(today, hour, &mut rng);
        let customers: Vec<Customer> = planned
            .times
            .iter()
            .map(|&t| Customer::new(ids.issue(), t, handle))
            .collect();
        let handed_over = carryover.len();
        let outcome = ServiceStation::run_hour(hour, decision.on_duty, carryover, customers).unwrap();
        assert_eq!(outcome.admitted_carryover, handed_over, "hour {hour}");
        arrived += outcome.arrived as u64;
        completed.extend(outcome.completed);
        carryover = outcome.carryover;
    }
    (completed, arrived, carryover)
}

// ── Customer lifecycle ────────────────────────────────────────────────────────

#[cfg(test)]
mod customer {
    use super::*;

    #[test]
    fn walks_the_full_lifecycle() {
        let mut c = arrival(1, at(0, 10), 300);
        assert_eq!(c.state, CustomerState::Arrived);
        c.enqueue(at(0, 10)).unwrap();
        assert_eq!(c.state, CustomerState::Queued);
        assert!(c.start(at(0, 40)).unwrap(), "first start");
        c.credit(300);
        let done = c.complete(at(0, 340)).unwrap();
        assert_eq!(c.state, CustomerState::Completed);
        assert_eq!(done.wait_secs(), 330);
        assert_eq!(done.charged_secs, 300);
    }

    #[test]
    fn resume_after_preempt_keeps_first_start() {
        let mut c = serving(1, at(0, 0), at(0, 5), 600, 100);
        c.preempt().unwrap();
        assert_eq!(c.state, CustomerState::Queued);
        assert!(!c.start(at(1, 0)).unwrap(), "resume is not a first start");
        assert_eq!(c.service_start, Some(at(0, 5)));
        assert_eq!(c.remaining_secs(), 500);
    }

    #[test]
    fn illegal_transition_is_an_invariant_error() {
        let mut c = arrival(1, at(0, 0), 60);
        let err = c.complete(at(0, 60)).unwrap_err();
        assert!(matches!(err, SimError::Invariant { .. }));
        assert!(!err.is_config());
    }

    #[test]
    fn credit_stops_at_handle_time() {
        let mut c = serving(1, at(0, 0), at(0, 0), 550, 2_400);
        assert_eq!(c.served_secs, 550);
        assert_eq!(c.remaining_secs(), 0);
        c.credit(60);
        assert_eq!(c.served_secs, 550);
        let done = c.complete(at(1, 0)).unwrap();
        assert_eq!(done.charged_secs, done.service_secs);
    }
}

// ── ServiceStation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod station {
    use super::*;

    #[test]
    fn single_arrival_is_served_immediately() {
        let out = ServiceStation::run_hour(4, 2, Carryover::default(), [arrival(1, at(4, 60), 550)])
            .unwrap();
        assert_eq!(out.arrived, 1);
        assert_eq!(out.started, 1);
        let done = &out.completed[0];
        assert_eq!(done.service_start, at(4, 60));
        assert_eq!(done.service_end, at(4, 610));
        assert_eq!(done.wait_secs(), 550);
        assert!(out.carryover.is_empty());
    }

    #[test]
    fn single_slot_serves_in_arrival_order() {
        let arrivals = [
            arrival(1, at(9, 0), 100),
            arrival(2, at(9, 10), 100),
            arrival(3, at(9, 20), 100),
        ];
        let out = ServiceStation::run_hour(9, 1, Carryover::default(), arrivals).unwrap();
        let starts: Vec<_> = out.completed.iter().map(|c| (c.id, c.service_start)).collect();
        assert_eq!(
            starts,
            vec![
                (CustomerId(1), at(9, 0)),
                (CustomerId(2), at(9, 100)),
                (CustomerId(3), at(9, 200)),
            ]
        );
        // third customer queued at +20, finished at +300
        assert_eq!(out.completed[2].wait_secs(), 280);
    }

    #[test]
    fn same_instant_arrivals_keep_submission_order() {
        let arrivals = [arrival(7, at(2, 30), 50), arrival(8, at(2, 30), 50)];
        let out = ServiceStation::run_hour(2, 1, Carryover::default(), arrivals).unwrap();
        assert_eq!(out.completed[0].id, CustomerId(7));
        assert_eq!(out.completed[1].id, CustomerId(8));
    }

    #[test]
    fn partially_served_customer_is_charged_only_the_rest() {
        let carry = Carryover {
            queued:     vec![],
            in_service: vec![ActiveCustomer {
                customer: serving(1, at(5, 3_000), at(5, 3_400), 550, 200),
            }],
        };
        let out = ServiceStation::run_hour(6, 1, carry, []).unwrap();
        let done = &out.completed[0];
        assert_eq!(done.service_end, at(6, 350));
        assert_eq!(done.charged_secs, 550);
        assert_eq!(done.service_start, at(5, 3_400));
        assert_eq!(out.started, 0, "a carried customer does not start again");
    }

    #[test]
    fn overserved_carryover_completes_at_hour_start_without_extra_charge() {
        let carry = Carryover {
            queued:     vec![],
            in_service: vec![ActiveCustomer {
                customer: serving(1, at(0, 0), at(0, 1_200), 550, 2_400),
            }],
        };
        let out = ServiceStation::run_hour(1, 1, carry, []).unwrap();
        let done = &out.completed[0];
        assert_eq!(done.service_end, SimTime::hour_start(1));
        assert_eq!(done.charged_secs, 550, "charged the handle time once");
        assert_eq!(done.service_secs, 550);
        assert_eq!(done.service_start, at(0, 1_200));
        assert_eq!(done.wait_secs(), HOUR_SECS);
    }

    #[test]
    fn service_ending_at_horizon_finishes_next_hour() {
        let out0 = ServiceStation::run_hour(0, 1, Carryover::default(), [arrival(1, at(0, 100), 3_500)])
            .unwrap();
        assert!(out0.completed.is_empty());
        assert_eq!(out0.carryover.in_service.len(), 1);
        assert_eq!(out0.carryover.in_service[0].remaining_secs(), 0);

        let out1 = ServiceStation::run_hour(1, 1, out0.carryover, []).unwrap();
        let done = &out1.completed[0];
        assert_eq!(done.service_end, SimTime::hour_start(1));
        assert_eq!(done.charged_secs, 3_500);
    }

    #[test]
    fn carryover_is_admitted_before_new_arrivals() {
        let carry = Carryover {
            queued:     vec![carried_queue(waiting(1, at(2, 3_550), 100), 3)],
            in_service: vec![],
        };
        let out = ServiceStation::run_hour(3, 1, carry, [arrival(2, at(3, 0), 100)]).unwrap();
        assert_eq!(out.completed[0].id, CustomerId(1));
        assert_eq!(out.completed[0].service_start, at(3, 0));
        assert_eq!(out.completed[1].id, CustomerId(2));
        assert_eq!(out.completed[1].service_start, at(3, 100));
        assert_eq!(out.admitted_carryover, 1);
    }

    #[test]
    fn queued_carryover_ages_one_hour() {
        let long = serving(1, at(1, 3_400), at(1, 3_500), 20_000, 100);
        let carry = Carryover {
            queued:     vec![carried_queue(waiting(2, at(1, 3_550), 300), 2)],
            in_service: vec![ActiveCustomer { customer: long }],
        };
        assert_eq!(carry.queued[0].waited_secs, 50);
        let out = ServiceStation::run_hour(2, 1, carry, []).unwrap();
        assert!(out.completed.is_empty());
        assert_eq!(out.carryover.len(), 2);
        assert_eq!(out.carryover.queued[0].waited_secs, 50 + HOUR_SECS);
        assert_eq!(out.carryover.in_service[0].customer.served_secs, 100 + HOUR_SECS);
    }

    #[test]
    fn new_arrivals_left_waiting_carry_their_wait_so_far() {
        let arrivals = [arrival(1, at(8, 3_000), 1_000), arrival(2, at(8, 3_100), 1_000)];
        let out = ServiceStation::run_hour(8, 1, Carryover::default(), arrivals).unwrap();
        assert_eq!(out.carryover.in_service.len(), 1);
        assert_eq!(out.carryover.in_service[0].customer.served_secs, 600);
        assert_eq!(out.carryover.queued.len(), 1);
        assert_eq!(out.carryover.queued[0].waited_secs, 500);
    }

    #[test]
    fn corrupt_queue_marker_aborts() {
        let long = serving(1, at(1, 3_400), at(1, 3_500), 20_000, 100);
        let mut q = carried_queue(waiting(2, at(1, 3_550), 300), 2);
        q.waited_secs = 999;
        let carry = Carryover { queued: vec![q], in_service: vec![ActiveCustomer { customer: long }] };
        let err = ServiceStation::run_hour(2, 1, carry, []).unwrap_err();
        assert!(matches!(err, SimError::Invariant { .. }), "{err}");
    }

    #[test]
    fn staffing_drop_preempts_latest_starters() {
        let early = serving(1, at(21, 0), at(21, 10), 5_000, 3_590);
        let late = serving(2, at(21, 1_000), at(21, 1_800), 3_000, 1_800);
        let carry = Carryover {
            queued:     vec![],
            in_service: vec![ActiveCustomer { customer: late }, ActiveCustomer { customer: early }],
        };
        let out = ServiceStation::run_hour(22, 1, carry, []).unwrap();
        assert_eq!(out.preempted, 1);
        assert_eq!(out.started, 0);
        assert_eq!(out.completed.len(), 2);

        let first = &out.completed[0];
        assert_eq!(first.id, CustomerId(1));
        assert_eq!(first.service_end, at(22, 1_410));

        let second = &out.completed[1];
        assert_eq!(second.id, CustomerId(2));
        assert_eq!(second.service_start, at(21, 1_800), "keeps its first start");
        assert_eq!(second.service_end, at(22, 1_410 + 1_200));
        assert_eq!(second.charged_secs, 3_000);
    }

    #[test]
    fn preempted_customers_go_ahead_of_the_queue() {
        let a = serving(1, at(21, 0), at(21, 0), 4_000, 3_600);
        let b = serving(2, at(21, 5), at(21, 5), 4_000, 3_595);
        let q = carried_queue(waiting(3, at(21, 10), 100), 22);
        let carry = Carryover {
            queued:     vec![q],
            in_service: vec![ActiveCustomer { customer: a }, ActiveCustomer { customer: b }],
        };
        let out = ServiceStation::run_hour(22, 1, carry, []).unwrap();
        let order: Vec<_> = out.completed.iter().map(|c| c.id.0).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = ServiceStation::open(3, 0, Carryover::default()).unwrap_err();
        assert!(matches!(err, SimError::Invariant { .. }));
    }

    #[test]
    fn arrival_outside_hour_is_rejected() {
        let mut station = ServiceStation::open(3, 1, Carryover::default()).unwrap();
        let err = station.admit_arrivals([arrival(1, at(4, 0), 60)]).unwrap_err();
        assert!(matches!(err, SimError::Invariant { .. }));
    }

    #[test]
    fn open_fills_slots_from_carryover() {
        let carry = Carryover {
            queued:     vec![
                carried_queue(waiting(1, at(6, 3_000), 100), 7),
                carried_queue(waiting(2, at(6, 3_100), 100), 7),
                carried_queue(waiting(3, at(6, 3_200), 100), 7),
            ],
            in_service: vec![],
        };
        let station = ServiceStation::open(7, 2, carry).unwrap();
        assert_eq!(station.in_service(), 2);
        assert_eq!(station.queued(), 1);
        assert_eq!(station.free_slots(), 0);
    }

    #[test]
    fn carryover_is_conserved_across_boundary() {
        let arrivals: Vec<_> = (0..30).map(|i| arrival(i + 1, at(10, i * 100), 900)).collect();
        let out = ServiceStation::run_hour(10, 2, Carryover::default(), arrivals).unwrap();
        let left = out.carryover.len();
        assert!(left > 0);
        assert_eq!(out.arrived, out.completed.len() + left);

        let next = ServiceStation::run_hour(11, 2, out.carryover, []).unwrap();
        assert_eq!(next.admitted_carryover, left);
        assert_eq!(next.completed.len() + next.carryover.len(), left);
    }
}

// ── MetricsCollector ──────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use super::*;

    fn done(queued: u64, end: u64) -> CompletedInteraction {
        CompletedInteraction {
            id:            CustomerId(1),
            arrived_at:    SimTime(queued),
            queued_at:     SimTime(queued),
            service_start: SimTime(queued),
            service_end:   SimTime(end),
            service_secs:  end - queued,
            charged_secs:  end - queued,
        }
    }

    #[test]
    fn asr_is_zero_without_waits() {
        assert_eq!(MetricsCollector::new().asr_minutes(), 0.0);
    }

    #[test]
    fn asr_is_mean_of_all_waits() {
        let mut m = MetricsCollector::new();
        m.record(&done(0, 60));
        m.record(&done(0, 180));
        m.record(&done(100, 460));
        // (60 + 180 + 360) / 3 = 200 s
        assert!((m.asr_minutes() - 200.0 / 60.0).abs() < 1e-12);
        assert_eq!(m.waits(), &[60, 180, 360]);
    }

    #[test]
    fn theoretical_maximum() {
        // 20 × 28 800 / 550 = 1047.27…
        assert_eq!(MetricsCollector::theoretical_max_servable(20, 550), 1_047);
        assert_eq!(MetricsCollector::theoretical_max_servable(20, 0), 0);
    }

    #[test]
    fn utilization_saturates_above_threshold() {
        let mut m = MetricsCollector::new();
        for _ in 0..96 {
            m.record(&done(0, 10));
        }
        // max for 1 start at 288 s = 100
        assert_eq!(m.utilization(1, 288), 1.0);

        let mut n = MetricsCollector::new();
        for _ in 0..50 {
            n.record(&done(0, 10));
        }
        assert!((n.utilization(1, 288) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn utilization_with_zero_maximum() {
        let mut m = MetricsCollector::new();
        assert_eq!(m.utilization(1, 100_000), 0.0);
        m.record(&done(0, 10));
        assert_eq!(m.utilization(1, 100_000), 1.0);
    }
}

// ── DayDriver ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod driver {
    use super::*;

    #[test]
    fn reference_day_handles_nearly_all_volume() {
        let day = DayDriver::new(reference_config()).unwrap().run(&mut NoopObserver).unwrap();
        let handled = day.handled as f64;
        assert!((902.5..=997.5).contains(&handled), "handled {handled}");
        assert!(day.asr_minutes.is_finite() && day.asr_minutes > 0.0);
        assert!((0.0..=1.0).contains(&day.utilization));
        assert_eq!(day.interactions_estimated, 950);
        assert_eq!(day.arrived, day.handled + day.unfinished as u64);
    }

    #[test]
    fn zero_agent_starts_rejected_before_any_hour() {
        let config = CenterConfig { agent_starts: 0, ..reference_config() };
        let err = DayDriver::new(config).unwrap_err();
        assert!(err.is_config());
        match err {
            SimError::Config(inner) => assert_eq!(inner.field(), Some("agent_starts")),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn run_day_rejects_bad_curve_without_emitting() {
        let mut config = reference_config();
        let mut values = *config.hourly_volume_share.values();
        values[12] += 0.1;
        config.hourly_volume_share = cc_core::HourlyCurve::new(values);
        let mut rec = RecordingObserver::default();
        assert!(crate::run_day(config, &mut rec).unwrap_err().is_config());
        assert!(rec.hours.is_empty() && rec.days.is_empty());
    }

    #[test]
    fn emits_one_record_per_hour_then_one_per_day() {
        let mut rec = RecordingObserver::default();
        let day = DayDriver::new(reference_config()).unwrap().run(&mut rec).unwrap();
        assert_eq!(rec.hours.len(), DAY_HOURS);
        assert_eq!(rec.days, vec![day.clone()]);
        for (h, hour) in rec.hours.iter().enumerate() {
            assert_eq!(hour.hour, h);
            assert!(hour.agents_working >= 1);
        }
        assert!(rec.hours.windows(2).all(|w| w[0].handled_total <= w[1].handled_total));
        let last = rec.hours.last().unwrap();
        assert_eq!(last.handled_total, day.handled);
        assert!((last.asr_minutes - day.asr_minutes).abs() < 1e-12);
        assert_eq!(last.queued_at_end + last.in_service_at_end, day.unfinished);
    }

    #[test]
    fn every_hour_receives_its_planned_arrivals() {
        let mut rec = RecordingObserver::default();
        DayDriver::new(reference_config()).unwrap().run(&mut rec).unwrap();
        for hour in &rec.hours {
            assert_eq!(hour.arrived as u64, hour.interactions_estimated, "hour {}", hour.hour);
        }
        assert_eq!(rec.hours[0].arrived, 1);
    }

    #[test]
    fn hourly_handled_sums_to_day() {
        let mut rec = RecordingObserver::default();
        let day = DayDriver::new(reference_config()).unwrap().run(&mut rec).unwrap();
        let handled: usize = rec.hours.iter().map(|h| h.handled).sum();
        let arrived: usize = rec.hours.iter().map(|h| h.arrived).sum();
        assert_eq!(handled as u64, day.handled);
        assert_eq!(arrived as u64, day.arrived);
    }

    #[test]
    fn asr_and_utilization_stay_in_range() {
        for starts in [1, 3, 10, 20, 45] {
            let config = CenterConfig { agent_starts: starts, ..reference_config() };
            let day = DayDriver::new(config).unwrap().run(&mut NoopObserver).unwrap();
            assert!(day.asr_minutes >= 0.0, "starts {starts}");
            assert!((0.0..=1.0).contains(&day.utilization), "starts {starts}");
            assert!(day.handled <= day.arrived, "starts {starts}");
        }
    }

    #[test]
    fn understaffed_day_leaves_unfinished_work() {
        let config = CenterConfig { agent_starts: 1, ..reference_config() };
        let day = DayDriver::new(config).unwrap().run(&mut NoopObserver).unwrap();
        assert!(day.unfinished > 0);
        assert_eq!(day.arrived, day.handled + day.unfinished as u64);
    }

    #[test]
    fn same_seed_same_day() {
        let config = CenterConfig { enable_randomization: true, seed: 17, ..reference_config() };
        let mut a = RecordingObserver::default();
        let mut b = RecordingObserver::default();
        DayDriver::new(config.clone()).unwrap().run(&mut a).unwrap();
        DayDriver::new(config).unwrap().run(&mut b).unwrap();
        assert_eq!(a.hours, b.hours);
        assert_eq!(a.days, b.days);
    }

    #[test]
    fn different_seed_different_day() {
        let a = CenterConfig { enable_randomization: true, seed: 1, ..reference_config() };
        let b = CenterConfig { seed: 2, ..a.clone() };
        let mut ra = RecordingObserver::default();
        let mut rb = RecordingObserver::default();
        DayDriver::new(a).unwrap().run(&mut ra).unwrap();
        DayDriver::new(b).unwrap().run(&mut rb).unwrap();
        assert_ne!(ra.hours, rb.hours);
    }

    #[test]
    fn forecast_drives_the_volume() {
        let mut forecast = [0.0; DAY_HOURS];
        forecast[10] = 30.4;
        forecast[11] = 20.0;
        let config = CenterConfig { hourly_forecast: Some(forecast), ..reference_config() };
        let mut rec = RecordingObserver::default();
        let day = DayDriver::new(config).unwrap().run(&mut rec).unwrap();
        assert_eq!(day.interactions_estimated, 50);
        assert_eq!(rec.hours[10].interactions_estimated, 30);
        assert_eq!(rec.hours[9].arrived, 0);
        assert_eq!(day.unfinished, 0);
        assert_eq!(day.handled, day.arrived);
    }

    struct HourCounter(usize);

    impl DayObserver for HourCounter {
        fn on_hour_end(&mut self, _hour: &HourSummary) {
            self.0 += 1;
        }
    }

    #[test]
    fn partial_observer_only_sees_what_it_asks_for() {
        let mut counter = HourCounter(0);
        crate::run_day(reference_config(), &mut counter).unwrap();
        assert_eq!(counter.0, DAY_HOURS);
    }
}

// ── Day-wide properties ───────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn first_queued_first_served_all_day() {
        for starts in [3, 20] {
            let config = CenterConfig { agent_starts: starts, ..reference_config() };
            let (mut completed, _, _) = simulate_completions(&config);
            completed.sort_by_key(|c| (c.queued_at, c.id));
            for pair in completed.windows(2) {
                assert!(
                    pair[0].service_start <= pair[1].service_start,
                    "{} queued before {} but started later",
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }

    #[test]
    fn every_completion_is_charged_exactly_once() {
        for starts in [2, 20] {
            let config = CenterConfig { agent_starts: starts, ..reference_config() };
            let (completed, _, _) = simulate_completions(&config);
            assert!(!completed.is_empty());
            for c in &completed {
                assert_eq!(c.charged_secs, c.service_secs, "{}", c.id);
            }
        }
    }

    #[test]
    fn handled_never_exceeds_arrived() {
        let (completed, arrived, left) = simulate_completions(&reference_config());
        assert!(completed.len() as u64 <= arrived);
        assert_eq!(completed.len() as u64 + left.len() as u64, arrived);
    }

    #[test]
    fn identities_are_never_reused() {
        let (completed, _, left) = simulate_completions(&reference_config());
        let mut ids: Vec<u64> = completed.iter().map(|c| c.id.0).collect();
        ids.extend(left.queued.iter().map(|q| q.customer.id.0));
        ids.extend(left.in_service.iter().map(|a| a.customer.id.0));
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&(total as u64)));
    }
}

// ── Sweeps ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep {
    use super::*;
    use crate::{ForecastSpectrum, Spectrum, Steps};

    #[test]
    fn steps_include_both_ends() {
        let v = Steps::new(8.5, 12.0, 0.5).values();
        assert_eq!(v.len(), 8);
        assert_eq!(v[0], 8.5);
        assert!((v[7] - 12.0).abs() < 1e-9);
        assert_eq!(Steps::single(9.17).values(), vec![9.17]);
    }

    #[test]
    fn spectrum_covers_the_grid_with_distinct_seeds() {
        let spectrum = Spectrum {
            base:           reference_config(),
            handle_minutes: Steps::new(9.0, 10.0, 0.5),
            interactions:   Steps::new(900.0, 1_000.0, 100.0),
            agent_starts:   18..=20,
            repeats:        2,
        };
        let configs = spectrum.configs();
        assert_eq!(configs.len(), 3 * 2 * 3 * 2);
        let mut seeds: Vec<u64> = configs.iter().map(|c| c.seed).collect();
        seeds.dedup();
        assert_eq!(seeds.len(), configs.len());
    }

    #[test]
    fn spectrum_replays_days_in_grid_order() {
        let spectrum = Spectrum {
            base:           reference_config(),
            handle_minutes: Steps::single(9.17),
            interactions:   Steps::single(950.0),
            agent_starts:   18..=20,
            repeats:        1,
        };
        let mut rec = RecordingObserver::default();
        let days = spectrum.run(&mut rec).unwrap();
        let starts: Vec<u32> = days.iter().map(|d| d.agent_starts).collect();
        assert_eq!(starts, vec![18, 19, 20]);
        assert_eq!(rec.days, days);
        assert_eq!(rec.hours.len(), 3 * DAY_HOURS);
    }

    #[test]
    fn invalid_point_fails_before_any_day() {
        let spectrum = ForecastSpectrum {
            base:          reference_config(),
            daily_volumes: vec![949.0],
            agent_starts:  0..=2,
        };
        let mut rec = RecordingObserver::default();
        assert!(spectrum.run(&mut rec).unwrap_err().is_config());
        assert!(rec.days.is_empty());
    }

    #[test]
    fn forecast_spectrum_rounds_volumes() {
        let spectrum = ForecastSpectrum {
            base:          reference_config(),
            daily_volumes: vec![934.05, 986.17],
            agent_starts:  10..=11,
        };
        let configs = spectrum.configs();
        let volumes: Vec<f64> = configs.iter().map(|c| c.interactions_mean).collect();
        assert_eq!(volumes, vec![934.0, 934.0, 986.0, 986.0]);
    }
}
