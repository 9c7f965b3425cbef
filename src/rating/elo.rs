use std::collections::HashMap;

use chrono::NaiveDate;
use log::info;

use super::types::{ContestRecord, RatingSnapshotRow, SnapshotDate, SnapshotPolicy, TeamId};
use crate::config::settings::EloSettings;
use crate::errors::EloError;

/// Runs the Elo recurrence over a chronologically ordered contest feed and
/// returns the full rating history: one baseline row per team plus a full
/// cross-section whenever the snapshot policy fires.
///
/// Pure function of (feed, settings); the rating state lives and dies inside
/// this call.
pub fn compute_ratings(
    contests: &[ContestRecord],
    settings: &EloSettings,
) -> Result<Vec<RatingSnapshotRow>, EloError> {
    validate_parameters(settings)?;

    let teams = derive_teams(contests);
    if teams.is_empty() {
        return Ok(Vec::new());
    }

    info!(
        "Computing Elo ratings for {} contests across {} teams (K={}, R={})",
        contests.len(),
        teams.len(),
        settings.k,
        settings.r
    );

    let mut state: HashMap<TeamId, f64> = teams
        .iter()
        .map(|t| (t.clone(), settings.baseline_rating))
        .collect();

    let mut rows = Vec::new();
    take_snapshot(&mut rows, &teams, &state, SnapshotDate::Start);

    let mut last_date: Option<NaiveDate> = None;
    for contest in contests {
        check_feed_order(last_date, contest.date)?;

        // Close out the previous date before touching the new one.
        if settings.snapshot_policy == SnapshotPolicy::DateTransition {
            if let Some(previous) = last_date {
                if contest.date > previous {
                    take_snapshot(&mut rows, &teams, &state, SnapshotDate::Played(previous));
                }
            }
        }

        apply_contest(&mut state, contest, settings)?;

        if settings.snapshot_policy == SnapshotPolicy::PerContest {
            take_snapshot(&mut rows, &teams, &state, SnapshotDate::Played(contest.date));
        }

        last_date = Some(contest.date);
    }

    // The last date never sees a transition, so it gets its snapshot here.
    if settings.snapshot_policy == SnapshotPolicy::DateTransition {
        if let Some(final_date) = last_date {
            take_snapshot(&mut rows, &teams, &state, SnapshotDate::Played(final_date));
        }
    }

    // Snapshots were appended chronologically; a stable sort on team regroups
    // the history by (team, date) with each team's dates still ascending.
    rows.sort_by(|a, b| a.team.cmp(&b.team).then(a.date.cmp(&b.date)));
    Ok(rows)
}

fn validate_parameters(settings: &EloSettings) -> Result<(), EloError> {
    if settings.k <= 0.0 {
        return Err(EloError::InvalidParameter {
            name: "K",
            value: settings.k,
        });
    }
    if settings.r <= 0.0 {
        return Err(EloError::InvalidParameter {
            name: "R",
            value: settings.r,
        });
    }
    Ok(())
}

/// Sorted distinct union of every team appearing in the feed.
fn derive_teams(contests: &[ContestRecord]) -> Vec<TeamId> {
    let mut teams: Vec<TeamId> = contests
        .iter()
        .flat_map(|c| [c.visitor.clone(), c.home.clone()])
        .collect();

    teams.sort();
    teams.dedup();
    teams
}

fn check_feed_order(last_date: Option<NaiveDate>, current: NaiveDate) -> Result<(), EloError> {
    if let Some(previous) = last_date {
        if current < previous {
            return Err(EloError::UnsortedFeed { previous, current });
        }
    }
    Ok(())
}

fn apply_contest(
    state: &mut HashMap<TeamId, f64>,
    contest: &ContestRecord,
    settings: &EloSettings,
) -> Result<(), EloError> {
    // Self-play would make the second write-back clobber the first; reject.
    if contest.visitor == contest.home {
        return Err(EloError::SelfPlay {
            team_id: contest.visitor.clone(),
            date: contest.date,
        });
    }

    let r_v = current_rating(state, &contest.visitor)?;
    let r_h = current_rating(state, &contest.home)?;

    // Expected score: logistic in the rating gap, scaled by R.
    let e_v = 1.0 / (1.0 + 10.0_f64.powf((r_h - r_v) / settings.r));
    let e_h = 1.0 - e_v;

    let (s_v, s_h) = contest.outcome.scores();

    // Written back immediately so later same-date contests see the update.
    state.insert(contest.visitor.clone(), r_v + settings.k * (s_v - e_v));
    state.insert(contest.home.clone(), r_h + settings.k * (s_h - e_h));
    Ok(())
}

fn current_rating(state: &HashMap<TeamId, f64>, team: &TeamId) -> Result<f64, EloError> {
    state
        .get(team)
        .copied()
        .ok_or_else(|| EloError::UnknownTeam {
            team_id: team.clone(),
        })
}

fn take_snapshot(
    rows: &mut Vec<RatingSnapshotRow>,
    teams: &[TeamId],
    state: &HashMap<TeamId, f64>,
    date: SnapshotDate,
) {
    for team in teams {
        rows.push(RatingSnapshotRow {
            team: team.clone(),
            date,
            rating: state[team],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::types::Outcome;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contest(d: NaiveDate, seq: u32, visitor: &str, home: &str, outcome: Outcome) -> ContestRecord {
        ContestRecord {
            date: d,
            seq,
            visitor: visitor.to_string(),
            home: home.to_string(),
            outcome,
        }
    }

    fn settings() -> EloSettings {
        EloSettings::default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn rating_of(rows: &[RatingSnapshotRow], team: &str, d: SnapshotDate) -> f64 {
        rows.iter()
            .find(|r| r.team == team && r.date == d)
            .map(|r| r.rating)
            .unwrap()
    }

    #[test]
    fn empty_feed_produces_no_rows() {
        let rows = compute_ratings(&[], &settings()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let feed = vec![contest(date(2020, 1, 1), 0, "NYA", "BOS", Outcome::VisitorWin)];

        let mut bad_k = settings();
        bad_k.k = 0.0;
        assert_eq!(
            compute_ratings(&feed, &bad_k),
            Err(EloError::InvalidParameter { name: "K", value: 0.0 })
        );

        let mut bad_r = settings();
        bad_r.r = -400.0;
        assert_eq!(
            compute_ratings(&feed, &bad_r),
            Err(EloError::InvalidParameter { name: "R", value: -400.0 })
        );
    }

    #[test]
    fn every_team_starts_at_baseline() {
        let feed = vec![
            contest(date(2020, 4, 1), 0, "NYA", "BOS", Outcome::VisitorWin),
            contest(date(2020, 4, 2), 0, "CHN", "NYA", Outcome::HomeWin),
        ];
        let rows = compute_ratings(&feed, &settings()).unwrap();

        let baselines: Vec<_> = rows
            .iter()
            .filter(|r| r.date == SnapshotDate::Start)
            .collect();
        assert_eq!(baselines.len(), 3);
        for row in baselines {
            assert_close(row.rating, 1200.0);
        }
    }

    #[test]
    fn single_win_moves_six_points_each_way() {
        // Both at 1200 => E = 0.5 each; K=12 => winner +6, loser -6.
        let d = date(2020, 1, 1);
        let feed = vec![contest(d, 0, "A", "B", Outcome::VisitorWin)];
        let rows = compute_ratings(&feed, &settings()).unwrap();

        assert_eq!(rows.len(), 4);
        assert_close(rating_of(&rows, "A", SnapshotDate::Start), 1200.0);
        assert_close(rating_of(&rows, "B", SnapshotDate::Start), 1200.0);
        assert_close(rating_of(&rows, "A", SnapshotDate::Played(d)), 1206.0);
        assert_close(rating_of(&rows, "B", SnapshotDate::Played(d)), 1194.0);
    }

    #[test]
    fn rating_mass_is_conserved() {
        // Zero-sum updates with a shared K: the total never moves.
        let feed = vec![
            contest(date(2020, 4, 1), 0, "NYA", "BOS", Outcome::VisitorWin),
            contest(date(2020, 4, 1), 1, "CHN", "LAN", Outcome::Tie),
            contest(date(2020, 4, 2), 0, "BOS", "CHN", Outcome::HomeWin),
            contest(date(2020, 4, 5), 0, "LAN", "NYA", Outcome::VisitorWin),
        ];
        let rows = compute_ratings(&feed, &settings()).unwrap();

        let last = SnapshotDate::Played(date(2020, 4, 5));
        let total: f64 = rows
            .iter()
            .filter(|r| r.date == last)
            .map(|r| r.rating)
            .sum();
        assert_close(total, 4.0 * 1200.0);
    }

    #[test]
    fn same_day_contests_apply_sequentially() {
        let d = date(2020, 1, 2);
        let feed = vec![
            contest(d, 0, "A", "B", Outcome::VisitorWin),
            contest(d, 1, "A", "B", Outcome::VisitorWin),
        ];
        let rows = compute_ratings(&feed, &settings()).unwrap();

        // One baseline + one played snapshot per team, nothing in between.
        assert_eq!(rows.len(), 4);

        // After the first win A sits at 1206; the second win comes from the
        // favored side, so it adds less than another 6.
        let a = rating_of(&rows, "A", SnapshotDate::Played(d));
        let b = rating_of(&rows, "B", SnapshotDate::Played(d));
        assert!(a > 1206.0 && a < 1212.0, "got {a}");
        assert_close(a + b, 2400.0);
    }

    #[test]
    fn per_contest_policy_snapshots_every_game() {
        let d = date(2020, 1, 2);
        let feed = vec![
            contest(d, 0, "A", "B", Outcome::VisitorWin),
            contest(d, 1, "A", "B", Outcome::VisitorWin),
        ];
        let mut per_contest = settings();
        per_contest.snapshot_policy = SnapshotPolicy::PerContest;

        let rows = compute_ratings(&feed, &per_contest).unwrap();
        // Baseline + one cross-section per contest.
        assert_eq!(rows.len(), 2 + 2 * 2);
    }

    #[test]
    fn row_count_matches_teams_and_dates() {
        let feed = vec![
            contest(date(2020, 4, 1), 0, "NYA", "BOS", Outcome::VisitorWin),
            contest(date(2020, 4, 1), 1, "CHN", "LAN", Outcome::HomeWin),
            contest(date(2020, 4, 3), 0, "NYA", "CHN", Outcome::Tie),
            contest(date(2020, 4, 7), 0, "BOS", "LAN", Outcome::VisitorWin),
        ];
        let rows = compute_ratings(&feed, &settings()).unwrap();

        // teams + teams * distinct dates
        assert_eq!(rows.len(), 4 + 4 * 3);
    }

    #[test]
    fn rows_are_grouped_by_team_with_dates_ascending() {
        let feed = vec![
            contest(date(2020, 4, 1), 0, "NYA", "BOS", Outcome::VisitorWin),
            contest(date(2020, 4, 2), 0, "BOS", "NYA", Outcome::HomeWin),
        ];
        let rows = compute_ratings(&feed, &settings()).unwrap();

        for pair in rows.windows(2) {
            assert!(pair[0].team <= pair[1].team);
            if pair[0].team == pair[1].team {
                assert!(pair[0].date < pair[1].date);
            }
        }
    }

    #[test]
    fn unsorted_feed_is_rejected() {
        let feed = vec![
            contest(date(2020, 4, 2), 0, "A", "B", Outcome::VisitorWin),
            contest(date(2020, 4, 1), 0, "A", "B", Outcome::HomeWin),
        ];
        assert_eq!(
            compute_ratings(&feed, &settings()),
            Err(EloError::UnsortedFeed {
                previous: date(2020, 4, 2),
                current: date(2020, 4, 1),
            })
        );
    }

    #[test]
    fn self_play_is_rejected() {
        let feed = vec![contest(date(2020, 4, 1), 0, "A", "A", Outcome::Tie)];
        assert_eq!(
            compute_ratings(&feed, &settings()),
            Err(EloError::SelfPlay {
                team_id: "A".to_string(),
                date: date(2020, 4, 1),
            })
        );
    }

    #[test]
    fn tie_between_equals_changes_nothing() {
        let d = date(2020, 4, 1);
        let feed = vec![contest(d, 0, "A", "B", Outcome::Tie)];
        let rows = compute_ratings(&feed, &settings()).unwrap();

        assert_close(rating_of(&rows, "A", SnapshotDate::Played(d)), 1200.0);
        assert_close(rating_of(&rows, "B", SnapshotDate::Played(d)), 1200.0);
    }

    #[test]
    fn identical_runs_produce_identical_output() {
        let feed = vec![
            contest(date(2020, 4, 1), 0, "NYA", "BOS", Outcome::VisitorWin),
            contest(date(2020, 4, 2), 0, "BOS", "NYA", Outcome::Tie),
        ];
        let first = compute_ratings(&feed, &settings()).unwrap();
        let second = compute_ratings(&feed, &settings()).unwrap();
        assert_eq!(first, second);
    }
}
