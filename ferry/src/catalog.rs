//! Built-in puzzles
//!
//! Every catalog puzzle starts with all passengers and the boat on the left
//! shore and asks for all of them on the right.

use crate::location::Side;
use crate::puzzle::{PassengerSpec, Puzzle};
use crate::{FerryError, FerryResult};

const NAMES: &[&str] = &[
    "family",
    "farmer",
    "farmer_extended",
    "jealous_couples",
    "missionaries",
];

/// Names of the built-in puzzles, sorted
pub fn names() -> &'static [&'static str] {
    NAMES
}

pub fn contains(name: &str) -> bool {
    NAMES.contains(&name)
}

/// Build a catalog puzzle by name
pub fn puzzle(name: &str) -> FerryResult<Puzzle> {
    match name {
        "farmer" => farmer(),
        "farmer_extended" => farmer_extended(),
        "family" => family(),
        "jealous_couples" => jealous_couples(),
        "missionaries" => missionaries(),
        _ => Err(FerryError::Engine(format!(
            "No built-in puzzle named '{}'. Available: {}",
            name,
            NAMES.join(", ")
        ))),
    }
}

/// Every catalog puzzle, in name order
pub fn all() -> FerryResult<Vec<Puzzle>> {
    NAMES.iter().map(|name| puzzle(name)).collect()
}

/// Wolf, goat and cabbage
pub fn farmer() -> FerryResult<Puzzle> {
    let mut builder = Puzzle::builder("farmer")
        .description("A farmer ferries a wolf, a goat and a cabbage")
        .capacity(2);
    let relations = builder.relations();
    let farmer = relations.species("Farmer");
    let wolf = relations.species("Wolf");
    let goat = relations.species("Goat");
    let goat_threat = relations.guarded(wolf, farmer);
    let cabbage_threat = relations.guarded(goat, farmer);

    builder
        .passenger(PassengerSpec::new("Farmer").navigator())
        .passenger(PassengerSpec::new("Wolf"))
        .passenger(PassengerSpec::new("Goat").threatened_by(goat_threat))
        .passenger(PassengerSpec::new("Cabbage").threatened_by(cabbage_threat))
        .start(Side::Left)
        .goal(Side::Right)
        .build()
}

/// The farmer puzzle with a stick that beats the wolf and a fire that burns the stick
pub fn farmer_extended() -> FerryResult<Puzzle> {
    let mut builder = Puzzle::builder("farmer_extended")
        .description("The farmer also carries a stick and a fire")
        .capacity(3);
    let relations = builder.relations();
    let farmer = relations.species("Farmer");
    let wolf = relations.species("Wolf");
    let goat = relations.species("Goat");
    let stick = relations.species("Stick");
    let fire = relations.species("Fire");
    let goat_threat = relations.guarded(wolf, farmer);
    let cabbage_threat = relations.guarded(goat, farmer);
    let wolf_threat = relations.guarded(stick, farmer);
    let stick_threat = relations.guarded(fire, farmer);

    builder
        .passenger(PassengerSpec::new("Farmer").navigator())
        .passenger(PassengerSpec::new("Wolf").threatened_by(wolf_threat))
        .passenger(PassengerSpec::new("Goat").threatened_by(goat_threat))
        .passenger(PassengerSpec::new("Cabbage").threatened_by(cabbage_threat))
        .passenger(PassengerSpec::new("Stick").threatened_by(stick_threat))
        .passenger(PassengerSpec::new("Fire"))
        .start(Side::Left)
        .goal(Side::Right)
        .build()
}

/// Police officer, thief and a family of six
pub fn family() -> FerryResult<Puzzle> {
    let mut builder = Puzzle::builder("family")
        .description("A police officer, a thief, and parents with two daughters and two sons")
        .capacity(2);
    let relations = builder.relations();
    let police = relations.species("Police");
    let thief = relations.species("Thief");
    let mother = relations.species("Mother");
    let father = relations.species("Father");
    let thief_threat = relations.guarded(thief, police);
    let daughter_threat = relations.guarded(father, mother);
    let son_threat = relations.guarded(mother, father);

    builder
        .passenger(PassengerSpec::new("Police").navigator())
        .passenger(PassengerSpec::new("Thief"))
        .passenger(
            PassengerSpec::new("Mother")
                .navigator()
                .threatened_by(thief_threat),
        )
        .passenger(
            PassengerSpec::new("Father")
                .navigator()
                .threatened_by(thief_threat),
        )
        .passenger(
            PassengerSpec::new("Daughter")
                .count(2)
                .threatened_by(thief_threat)
                .threatened_by(daughter_threat),
        )
        .passenger(
            PassengerSpec::new("Son")
                .count(2)
                .threatened_by(thief_threat)
                .threatened_by(son_threat),
        )
        .start(Side::Left)
        .goal(Side::Right)
        .build()
}

/// Three couples; no wife may be with another husband unless her own is there
pub fn jealous_couples() -> FerryResult<Puzzle> {
    let mut builder = Puzzle::builder("jealous_couples")
        .description("Three jealous husbands and their wives")
        .capacity(2);

    let mut wives = Vec::new();
    let relations = builder.relations();
    let husbands: Vec<_> = (1..=3)
        .map(|n| relations.species(format!("Husband {}", n)))
        .collect();
    for own in 0..husbands.len() {
        let others: Vec<_> = husbands
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != own)
            .map(|(_, husband)| *husband)
            .collect();
        let rivals = relations.any(others[0], others[1]);
        wives.push(relations.guarded(rivals, husbands[own]));
    }

    for n in 1..=3 {
        builder = builder.passenger(PassengerSpec::new(format!("Husband {}", n)).navigator());
    }
    for (n, threat) in (1..=3).zip(wives) {
        builder = builder.passenger(
            PassengerSpec::new(format!("Wife {}", n))
                .navigator()
                .threatened_by(threat),
        );
    }
    builder.start(Side::Left).goal(Side::Right).build()
}

/// Missionaries and cannibals
pub fn missionaries() -> FerryResult<Puzzle> {
    let mut builder = Puzzle::builder("missionaries")
        .description("Missionaries may never be outnumbered by cannibals")
        .capacity(2);
    let relations = builder.relations();
    let missionary = relations.species("Missionary");
    let cannibal = relations.species("Cannibal");
    let outnumbered = relations.count(cannibal, missionary);

    builder
        .passenger(
            PassengerSpec::new("Missionary")
                .count(3)
                .navigator()
                .threatened_by(outnumbered),
        )
        .passenger(PassengerSpec::new("Cannibal").count(3).navigator())
        .start(Side::Left)
        .goal(Side::Right)
        .build()
}
