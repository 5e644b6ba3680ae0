//! Progress momentum tracking — the only stateful piece of the engine.
//!
//! One read-modify-write per completed action. The engine assumes
//! at-most-one in-flight update per user; racing writers can lose
//! updates, and callers needing strict ordering serialize externally.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::models::progress::{CompletedAction, ProgressTracking, ProgressUpdate};
use crate::storage::progress::ProgressRepository;

const CELEBRATION_POOL: &[&str] = &[
    "That's a real step forward: ",
    "Momentum looks good — you just completed: ",
    "Another win on the board: ",
    "Keep stacking these: ",
];

/// Ladder of recommended next milestones, keyed by how many the user has
/// already completed.
const NEXT_MILESTONES: &[&str] = &[
    "Update one resume section with a quantified achievement",
    "Reach out to one person in your target industry",
    "Apply to two roles that fit your target",
    "Do a mock interview run-through",
    "Follow up on your open applications",
];

pub struct MomentumTracker {
    repository: Arc<dyn ProgressRepository>,
    config: EngineConfig,
}

impl MomentumTracker {
    pub fn new(repository: Arc<dyn ProgressRepository>, config: EngineConfig) -> Self {
        Self { repository, config }
    }

    /// Records one completed action: appends to the confidence
    /// trajectory (append-only, exactly one entry per call), bumps
    /// momentum by a fixed increment, and persists before returning.
    pub async fn record_completed_action<R: Rng>(
        &self,
        user_id: &str,
        action: &CompletedAction,
        rng: &mut R,
    ) -> Result<ProgressUpdate, EngineError> {
        let mut tracking = self
            .repository
            .load(user_id)
            .await?
            .unwrap_or_else(|| self.initial_tracking());

        tracking
            .completed_milestones
            .push(action.description.clone());
        tracking.wins_accumulated.push(action.outcome.clone());

        // Self-reported boost, clamped like every other emotional signal.
        let boost = action.confidence_boost.clamp(0.0, 1.0);
        let last_confidence = tracking
            .confidence_trajectory
            .last()
            .copied()
            .unwrap_or(self.config.initial_confidence);
        let new_confidence = (last_confidence + boost).min(1.0);
        tracking.confidence_trajectory.push(new_confidence);

        // Fixed increment per event, not proportional to the boost.
        tracking.momentum_score =
            (tracking.momentum_score + self.config.momentum_increment).min(1.0);

        let milestone_count = tracking.completed_milestones.len();
        let progress_percentage = (milestone_count as u32 * 20).min(100);

        let ladder_index = milestone_count.min(NEXT_MILESTONES.len() - 1);
        let next_recommended_action = NEXT_MILESTONES[ladder_index].to_string();
        tracking.next_milestone = next_recommended_action.clone();
        tracking.updated_at = Utc::now();

        let celebration_message = format!(
            "{}{}",
            CELEBRATION_POOL[rng.gen_range(0..CELEBRATION_POOL.len())],
            action.description
        );

        self.repository.save(user_id, &tracking).await?;
        debug!(
            "recorded action for {user_id}: {} milestones, momentum {:.2}",
            milestone_count, tracking.momentum_score
        );

        Ok(ProgressUpdate {
            celebration_message,
            new_confidence,
            momentum_score: tracking.momentum_score,
            progress_percentage,
            next_recommended_action,
        })
    }

    fn initial_tracking(&self) -> ProgressTracking {
        ProgressTracking {
            completed_milestones: Vec::new(),
            confidence_trajectory: vec![self.config.initial_confidence],
            momentum_score: self.config.initial_momentum,
            wins_accumulated: Vec::new(),
            next_milestone: NEXT_MILESTONES[0].to_string(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::storage::kv::InMemoryKeyValueStore;
    use crate::storage::progress::KvProgressRepository;

    fn tracker() -> (MomentumTracker, Arc<KvProgressRepository>) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = Arc::new(KvProgressRepository::new(store));
        (
            MomentumTracker::new(repo.clone(), EngineConfig::default()),
            repo,
        )
    }

    fn action(description: &str, boost: f64) -> CompletedAction {
        CompletedAction {
            description: description.to_string(),
            outcome: format!("{description} done"),
            confidence_boost: boost,
        }
    }

    #[tokio::test]
    async fn test_first_action_initializes_then_appends() {
        let (tracker, repo) = tracker();
        let mut rng = StdRng::seed_from_u64(3);

        let update = tracker
            .record_completed_action("user-1", &action("Updated resume", 0.1), &mut rng)
            .await
            .unwrap();

        assert!((update.new_confidence - 0.6).abs() < 1e-9);
        assert_eq!(update.progress_percentage, 20);

        let stored = repo.load("user-1").await.unwrap().unwrap();
        assert_eq!(stored.confidence_trajectory, vec![0.5, 0.6]);
        assert_eq!(stored.completed_milestones, vec!["Updated resume"]);
        assert_eq!(stored.wins_accumulated, vec!["Updated resume done"]);
    }

    #[tokio::test]
    async fn test_trajectory_grows_by_exactly_one_per_call() {
        let (tracker, repo) = tracker();
        let mut rng = StdRng::seed_from_u64(3);

        for i in 0..4 {
            tracker
                .record_completed_action("user-1", &action(&format!("step {i}"), 0.05), &mut rng)
                .await
                .unwrap();
            let stored = repo.load("user-1").await.unwrap().unwrap();
            // Initial [0.5] plus one appended entry per recorded action.
            assert_eq!(stored.confidence_trajectory.len(), i + 2);
        }
    }

    #[tokio::test]
    async fn test_prior_trajectory_entries_never_mutated() {
        let (tracker, repo) = tracker();
        let mut rng = StdRng::seed_from_u64(3);

        tracker
            .record_completed_action("user-1", &action("a", 0.2), &mut rng)
            .await
            .unwrap();
        let before = repo.load("user-1").await.unwrap().unwrap().confidence_trajectory;

        tracker
            .record_completed_action("user-1", &action("b", 0.2), &mut rng)
            .await
            .unwrap();
        let after = repo.load("user-1").await.unwrap().unwrap().confidence_trajectory;

        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[tokio::test]
    async fn test_confidence_and_momentum_cap_at_one() {
        let (tracker, _) = tracker();
        let mut rng = StdRng::seed_from_u64(3);

        let mut update = None;
        for _ in 0..10 {
            update = Some(
                tracker
                    .record_completed_action("user-1", &action("big win", 0.9), &mut rng)
                    .await
                    .unwrap(),
            );
        }
        let update = update.unwrap();
        assert_eq!(update.new_confidence, 1.0);
        assert_eq!(update.momentum_score, 1.0);
    }

    #[tokio::test]
    async fn test_momentum_increment_is_fixed_not_proportional() {
        let (tracker, _) = tracker();
        let mut rng = StdRng::seed_from_u64(3);

        let small = tracker
            .record_completed_action("a", &action("tiny", 0.01), &mut rng)
            .await
            .unwrap();
        let large = tracker
            .record_completed_action("b", &action("huge", 0.9), &mut rng)
            .await
            .unwrap();
        assert!((small.momentum_score - large.momentum_score).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_progress_percentage_caps_at_100() {
        let (tracker, _) = tracker();
        let mut rng = StdRng::seed_from_u64(3);

        let mut last = 0;
        for _ in 0..7 {
            last = tracker
                .record_completed_action("user-1", &action("step", 0.05), &mut rng)
                .await
                .unwrap()
                .progress_percentage;
        }
        assert_eq!(last, 100);
    }

    #[tokio::test]
    async fn test_negative_boost_clamped_to_zero() {
        let (tracker, _) = tracker();
        let mut rng = StdRng::seed_from_u64(3);

        let update = tracker
            .record_completed_action("user-1", &action("rough day", -0.5), &mut rng)
            .await
            .unwrap();
        assert!((update.new_confidence - 0.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_celebration_message_ends_with_action_description() {
        let (tracker, _) = tracker();
        let mut rng = StdRng::seed_from_u64(3);

        let update = tracker
            .record_completed_action("user-1", &action("Sent two applications", 0.1), &mut rng)
            .await
            .unwrap();
        assert!(update.celebration_message.ends_with("Sent two applications"));
        assert!(CELEBRATION_POOL
            .iter()
            .any(|p| update.celebration_message.starts_with(p)));
    }

    #[tokio::test]
    async fn test_seeded_rng_is_deterministic() {
        let (tracker_a, _) = tracker();
        let (tracker_b, _) = tracker();

        let a = tracker_a
            .record_completed_action("u", &action("step", 0.1), &mut StdRng::seed_from_u64(42))
            .await
            .unwrap();
        let b = tracker_b
            .record_completed_action("u", &action("step", 0.1), &mut StdRng::seed_from_u64(42))
            .await
            .unwrap();
        assert_eq!(a.celebration_message, b.celebration_message);
    }
}
