use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank.value() - 2)
}

/// Маски всех стритов, от wheel (A2345) до broadway (TJQKA),
/// вместе со старшей картой стрита.
fn straight_masks() -> impl DoubleEndedIterator<Item = (RankMask, Rank)> {
    // Стрит со старшей картой high занимает биты high-4..=high (в терминах value-2).
    let regular = (Rank::Six.value()..=Rank::Ace.value()).filter_map(|high| {
        let top = Rank::from_value(high)?;
        let mask = (0..5).fold(0u16, |m, k| m | (1u16 << (high - 2 - k)));
        Some((mask, top))
    });
    let wheel = rank_to_bit(Rank::Ace)
        | rank_to_bit(Rank::Two)
        | rank_to_bit(Rank::Three)
        | rank_to_bit(Rank::Four)
        | rank_to_bit(Rank::Five);
    std::iter::once((wheel, Rank::Five)).chain(regular)
}

/// Найти самый старший стрит в маске. Для wheel старшая карта – пятёрка.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    straight_masks()
        .rev()
        .find(|(mask, _)| rank_mask & mask == *mask)
        .map(|(_, high)| high)
}

/// Пять рангов стрита от старшего к младшему (туз в wheel – последний).
pub fn straight_ranks(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let h = high.value();
    let pick = |k: u8| Rank::from_value(h - k).unwrap_or(Rank::Two);
    [pick(0), pick(1), pick(2), pick(3), pick(4)]
}
