// src/rank.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankTier {
    High,
    Medium,
    Low,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rank {
    pub tier: RankTier,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

// Ordenados de mayor a menor umbral; el último debe empezar en 0.
const TIERS: [(u64, Rank); 3] = [
    (
        75,
        Rank {
            tier: RankTier::High,
            title: "靈魂級摯友",
            icon: "👑",
            description: "從萬芳醫院到 12/18，每個細節都刻在心裡，這份默契沒人比得上。",
        },
    ),
    (
        50,
        Rank {
            tier: RankTier::Medium,
            title: "默契好夥伴",
            icon: "🤝",
            description: "大部分的回憶都還記得，找天去政大喝杯咖啡把漏掉的八卦補齊吧！",
        },
    ),
    (
        0,
        Rank {
            tier: RankTier::Low,
            title: "失憶的路人",
            icon: "🫠",
            description: "看來該回到 2022 年，把聊天紀錄從頭再看一遍了。",
        },
    ),
];

/// Rango para `score` aciertos sobre `total` preguntas.
/// Función escalonada y monótona sobre el porcentaje de aciertos.
pub fn rank_for(score: usize, total: usize) -> Rank {
    let (_, lowest) = &TIERS[TIERS.len() - 1];
    if total == 0 {
        return lowest.clone();
    }

    let score = score.min(total) as u64;
    let total = total as u64;
    TIERS
        .iter()
        .find(|(min_percent, _)| score * 100 >= min_percent * total)
        .map(|(_, rank)| rank.clone())
        .unwrap_or_else(|| lowest.clone())
}

/// Puntuación sobre 100 (`score / total * 100`, redondeada).
pub fn points(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = score.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_is_total_and_deterministic_over_the_score_range() {
        for score in 0..=20 {
            let a = rank_for(score, 20);
            let b = rank_for(score, 20);
            assert_eq!(a, b);
            assert!(!a.title.is_empty());
        }
    }

    #[test]
    fn tiers_follow_the_authored_thresholds() {
        assert_eq!(rank_for(20, 20).tier, RankTier::High);
        assert_eq!(rank_for(15, 20).tier, RankTier::High);
        assert_eq!(rank_for(14, 20).tier, RankTier::Medium);
        assert_eq!(rank_for(10, 20).tier, RankTier::Medium);
        assert_eq!(rank_for(9, 20).tier, RankTier::Low);
        assert_eq!(rank_for(0, 20).tier, RankTier::Low);
    }

    #[test]
    fn rank_is_monotonic_in_score() {
        let order = |tier: RankTier| match tier {
            RankTier::Low => 0,
            RankTier::Medium => 1,
            RankTier::High => 2,
        };
        let tiers: Vec<_> = (0..=20).map(|s| order(rank_for(s, 20).tier)).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn degenerate_totals_do_not_panic() {
        assert_eq!(rank_for(0, 0).tier, RankTier::Low);
        assert_eq!(rank_for(30, 20).tier, RankTier::High);
        assert_eq!(points(3, 0), 0);
    }

    #[test]
    fn points_scale_to_one_hundred() {
        assert_eq!(points(15, 20), 75);
        assert_eq!(points(20, 20), 100);
        assert_eq!(points(0, 20), 0);
        assert_eq!(points(2, 3), 67);
    }
}
