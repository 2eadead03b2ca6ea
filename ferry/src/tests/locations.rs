use crate::location::{Boat, Location, Shore, Side};
use crate::passenger::{Manifest, Passenger, PassengerId};
use crate::relation::RelationGraph;
use crate::FerryError;

/// Farmer (navigator), Wolf, Goat (threatened by Wolf unless Farmer), heavy Ox
fn manifest() -> Manifest {
    let mut builder = RelationGraph::builder();
    let wolf = builder.species("Wolf");
    let farmer = builder.species("Farmer");
    let threat = builder.guarded(wolf, farmer);
    let graph = builder.build();

    let passengers = vec![
        Passenger {
            id: PassengerId(0),
            species: "Farmer".to_string(),
            weight: 1,
            navigator: true,
            relations: vec![],
        },
        Passenger {
            id: PassengerId(1),
            species: "Wolf".to_string(),
            weight: 1,
            navigator: false,
            relations: vec![],
        },
        Passenger {
            id: PassengerId(2),
            species: "Goat".to_string(),
            weight: 1,
            navigator: false,
            relations: vec![threat],
        },
        Passenger {
            id: PassengerId(3),
            species: "Ox".to_string(),
            weight: 3,
            navigator: false,
            relations: vec![],
        },
    ];
    Manifest::new(passengers, graph).unwrap()
}

const FARMER: PassengerId = PassengerId(0);
const WOLF: PassengerId = PassengerId(1);
const GOAT: PassengerId = PassengerId(2);
const OX: PassengerId = PassengerId(3);

#[test]
fn test_shore_accepts_everybody() {
    let manifest = manifest();
    let mut shore = Shore::new(Side::Left);
    for id in manifest.ids() {
        assert!(shore.add(id, &manifest));
    }
    assert_eq!(shore.occupants().len(), 4);
    assert_eq!(shore.weight(&manifest), 6);
    assert_eq!(shore.species(&manifest), vec!["Farmer", "Goat", "Ox", "Wolf"]);
}

#[test]
fn test_boat_refuses_over_capacity() {
    let manifest = manifest();
    let mut boat = Boat::new(2, Side::Left);
    assert!(boat.add(FARMER, &manifest));
    assert!(!boat.add(OX, &manifest));
    assert!(boat.add(WOLF, &manifest));
    assert!(!boat.add(GOAT, &manifest));
    assert_eq!(boat.weight(&manifest), 2);
}

#[test]
fn test_unknown_passenger_is_refused() {
    let manifest = manifest();
    let stranger = PassengerId(99);
    let mut shore = Shore::new(Side::Left);
    let mut boat = Boat::new(2, Side::Left);

    assert!(!shore.add(stranger, &manifest));
    assert!(!boat.add(stranger, &manifest));
    assert!(shore.is_empty());
    assert!(boat.is_empty());
}

#[test]
fn test_unknown_occupant_is_ignored() {
    let manifest = manifest();
    let mut boat = Boat::new(2, Side::Left);
    boat.add(WOLF, &manifest);
    boat.occupants_mut().push(PassengerId(99));

    assert_eq!(boat.weight(&manifest), 1);
    assert_eq!(boat.species(&manifest), vec!["Wolf"]);
    assert!(!boat.has_navigator(&manifest));
    assert!(boat.check_survival(&manifest).is_ok());
}

#[test]
fn test_weight_saturates() {
    let manifest = Manifest::new(
        vec![
            Passenger {
                id: PassengerId(0),
                species: "Whale".to_string(),
                weight: u32::MAX,
                navigator: true,
                relations: vec![],
            },
            Passenger {
                id: PassengerId(1),
                species: "Krill".to_string(),
                weight: 1,
                navigator: false,
                relations: vec![],
            },
        ],
        RelationGraph::builder().build(),
    )
    .unwrap();
    let mut shore = Shore::new(Side::Left);
    shore.add(PassengerId(0), &manifest);
    shore.add(PassengerId(1), &manifest);

    assert_eq!(shore.weight(&manifest), u32::MAX);

    let mut boat = Boat::new(u32::MAX, Side::Left);
    assert!(boat.add(PassengerId(0), &manifest));
    assert!(!boat.add(PassengerId(1), &manifest));
}

#[test]
fn test_move_to_keeps_refused_passenger() {
    let manifest = manifest();
    let mut shore = Shore::new(Side::Left);
    shore.add(OX, &manifest);
    let mut boat = Boat::new(2, Side::Left);

    assert!(!shore.move_to(OX, &mut boat, &manifest));
    assert!(shore.contains(OX));
    assert!(boat.is_empty());
}

#[test]
fn test_move_to_absent_passenger_is_noop() {
    let manifest = manifest();
    let mut shore = Shore::new(Side::Left);
    let mut boat = Boat::new(2, Side::Left);
    assert!(!shore.move_to(WOLF, &mut boat, &manifest));
    assert!(boat.is_empty());
}

#[test]
fn test_survival_reports_victim_and_predators() {
    let manifest = manifest();
    let mut shore = Shore::new(Side::Right);
    shore.add(WOLF, &manifest);
    shore.add(GOAT, &manifest);

    match shore.check_survival(&manifest) {
        Err(FerryError::Death {
            location,
            victim,
            predators,
        }) => {
            assert_eq!(location, "Right");
            assert_eq!(victim, "Goat");
            assert_eq!(predators, vec!["Wolf".to_string()]);
        }
        other => panic!("Expected Death, got {:?}", other),
    }

    shore.add(FARMER, &manifest);
    assert!(shore.check_survival(&manifest).is_ok());
}

#[test]
fn test_death_message() {
    let err = FerryError::Death {
        location: "Left".to_string(),
        victim: "Goat".to_string(),
        predators: vec!["Wolf".to_string(), "Dog".to_string()],
    };
    assert_eq!(err.to_string(), "Goat is killed by: Wolf, Dog (on Left)");
}

#[test]
fn test_cross_requires_navigator() {
    let manifest = manifest();
    let mut boat = Boat::new(2, Side::Left);
    boat.add(WOLF, &manifest);
    let mut right = Shore::new(Side::Right);

    let result = boat.cross(&mut right, &manifest);
    assert!(matches!(result, Err(FerryError::NoNavigator { .. })));
    assert_eq!(boat.side(), Side::Left);
    assert!(right.is_empty());
}

#[test]
fn test_cross_empties_on_arrival() {
    let manifest = manifest();
    let mut boat = Boat::new(2, Side::Left);
    boat.add(FARMER, &manifest);
    boat.add(GOAT, &manifest);
    let mut right = Shore::new(Side::Right);

    boat.cross(&mut right, &manifest).unwrap();
    assert_eq!(boat.side(), Side::Right);
    assert!(boat.is_empty());
    assert_eq!(right.species(&manifest), vec!["Farmer", "Goat"]);
}

#[test]
fn test_cross_can_keep_passengers_aboard() {
    let manifest = manifest();
    let mut boat = Boat::new(2, Side::Left).with_empty_on_arrival(false);
    boat.add(FARMER, &manifest);
    let mut right = Shore::new(Side::Right);

    boat.cross(&mut right, &manifest).unwrap();
    assert_eq!(boat.side(), Side::Right);
    assert!(boat.contains(FARMER));
    assert!(right.is_empty());
}

#[test]
fn test_side_parsing() {
    assert_eq!("left".parse::<Side>().unwrap(), Side::Left);
    assert_eq!("RIGHT".parse::<Side>().unwrap(), Side::Right);
    assert!("middle".parse::<Side>().is_err());
    assert_eq!(Side::Left.opposite(), Side::Right);
    assert_eq!(Side::Right.to_string(), "Right");
}

#[test]
fn test_manifest_rejects_sparse_ids() {
    let passengers = vec![Passenger {
        id: PassengerId(5),
        species: "Goat".to_string(),
        weight: 1,
        navigator: false,
        relations: vec![],
    }];
    let result = Manifest::new(passengers, RelationGraph::default());
    assert!(matches!(result, Err(FerryError::Engine(_))));
}
