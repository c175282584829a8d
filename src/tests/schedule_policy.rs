#[cfg(test)]
mod test {

    use std::time::Duration;

    use tokio::time::Instant;

    use crate::scheduler::schedule::RefreshSchedule;

    #[tokio::test(start_paused = true)]
    async fn half_life_deadline_and_renewal() {
        let t0 = Instant::now();
        let mut schedule = RefreshSchedule::new(2);
        schedule.record_success(t0, Duration::from_secs(100));
        assert_eq!(schedule.next_deadline() - t0, Duration::from_secs(50));

        // refresh at the deadline succeeds with a shorter-lived token
        let t1 = t0 + Duration::from_secs(50);
        schedule.record_success(t1, Duration::from_secs(60));
        assert_eq!(schedule.next_deadline() - t0, Duration::from_secs(80));
    }

    #[tokio::test(start_paused = true)]
    async fn fraction_is_clamped_to_two() {
        for fraction in [0, 1] {
            let t0 = Instant::now();
            let mut schedule = RefreshSchedule::new(fraction);
            schedule.record_success(t0, Duration::from_secs(100));
            assert_eq!(schedule.next_deadline() - t0, Duration::from_secs(50));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn decision_is_a_noop_before_the_deadline() {
        let t0 = Instant::now();
        let mut schedule = RefreshSchedule::new(2);
        schedule.record_success(t0, Duration::from_secs(100));

        let deadline = schedule.next_deadline();
        assert!(!schedule.is_due(t0 + Duration::from_secs(49)));
        // querying the decision changes nothing
        assert_eq!(schedule.next_deadline(), deadline);
        assert_eq!(schedule.valid_for(), Duration::from_secs(100));

        assert!(schedule.is_due(t0 + Duration::from_secs(50)));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_precedes_expiry_for_any_fraction() {
        for fraction in [0, 1, 2, 3, 10] {
            let t0 = Instant::now();
            let mut schedule = RefreshSchedule::new(fraction);
            schedule.record_success(t0, Duration::from_secs(90));
            assert!(schedule.next_deadline() < t0 + Duration::from_secs(90));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn empty_window_is_immediately_due() {
        let schedule = RefreshSchedule::new(2);
        assert!(schedule.is_due(Instant::now()));
    }
}
