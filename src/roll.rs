use crate::error::DiceError;
use log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of individual die results. Everything random in a
/// calculation goes through one of these.
pub trait DieRoller {
    /// Roll one die, returning a number in `1..=faces`. Callers
    /// guarantee `faces >= 1`.
    fn roll_die(&mut self, faces: i64) -> i64;
}

///A version of DieRoller that uses a rand::Rng to roll numbers.
pub struct RngDieRoller<R: rand::Rng>(pub R);

impl RngDieRoller<StdRng> {
    pub fn from_entropy() -> RngDieRoller<StdRng> {
        RngDieRoller(StdRng::from_entropy())
    }

    /// Reproducible rolls, for replaying a session.
    pub fn seeded(seed: u64) -> RngDieRoller<StdRng> {
        RngDieRoller(StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> DieRoller for RngDieRoller<R> {
    fn roll_die(&mut self, faces: i64) -> i64 {
        self.0.gen_range(1..=faces)
    }
}

/// Roll `multiplier` dice with `faces` sides each and add them up.
/// Rolling zero dice is always zero, whatever the face count.
pub fn roll<R: DieRoller + ?Sized>(
    roller: &mut R,
    multiplier: i64,
    faces: i64,
) -> Result<i64, DiceError> {
    if multiplier < 0 {
        return Err(DiceError::InvalidAmount(multiplier));
    }

    if multiplier == 0 {
        return Ok(0);
    }

    if faces < 1 {
        return Err(DiceError::DegenerateRollFault(faces));
    }

    let mut total: i64 = 0;
    for _ in 0..multiplier {
        let die = roller.roll_die(faces);
        trace!("rolled d{} => {}", faces, die);
        total = total.checked_add(die).ok_or(DiceError::Overflow)?;
    }

    Ok(total)
}
