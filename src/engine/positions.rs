use crate::domain::hand::Street;
use crate::domain::player::Position;

/// Следующая кнопка дилера: на одно место по кругу.
/// Если кнопки ещё не было – место 0.
pub fn next_dealer(current: Option<usize>, seat_count: usize) -> usize {
    match current {
        Some(d) if seat_count > 0 => (d + 1) % seat_count,
        _ => 0,
    }
}

/// Места малого и большого блайнда: два места сразу после дилера.
///
/// В хедз-апе большой блайнд совпадает с местом дилера.
pub fn blind_seats(dealer: usize, seat_count: usize) -> (usize, usize) {
    ((dealer + 1) % seat_count, (dealer + 2) % seat_count)
}

/// Кто ходит первым: префлоп – третий после дилера, дальше – первый после дилера.
pub fn first_to_act(street: Street, dealer: usize, seat_count: usize) -> usize {
    match street {
        Street::PreFlop => (dealer + 3) % seat_count,
        _ => (dealer + 1) % seat_count,
    }
}

/// Позиция места по смещению от кнопки.
pub fn position_for_offset(offset: usize) -> Position {
    match offset {
        0 => Position::Dealer,
        1 => Position::SmallBlind,
        2 => Position::BigBlind,
        3 => Position::UnderTheGun,
        k => Position::MiddlePosition(u8::try_from(k - 3).unwrap_or(u8::MAX)),
    }
}

/// Позиции всех мест для данной кнопки, в порядке мест.
///
/// Места блайндов берутся из `blind_seats`: в хедз-апе дилер получает `BigBlind`.
pub fn positions_from(dealer: usize, seat_count: usize) -> Vec<Position> {
    let mut positions: Vec<Position> = (0..seat_count)
        .map(|seat| position_for_offset((seat + seat_count - dealer) % seat_count))
        .collect();
    if seat_count >= 2 {
        let (sb, bb) = blind_seats(dealer, seat_count);
        positions[sb] = Position::SmallBlind;
        positions[bb] = Position::BigBlind;
    }
    positions
}

/// Порядок мест по кругу, начиная с `start` (все места, без фильтрации).
pub fn rotation_from(start: usize, seat_count: usize) -> impl Iterator<Item = usize> {
    (0..seat_count).map(move |i| (start + i) % seat_count)
}
