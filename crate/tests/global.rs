// The process-wide rules are shared by every test in this file, so all of
// the checks live in a single test to keep them from racing each other.

use inflection::{Error, Irregular, Regular};

fn check_built_in_rules() {
    let plurals = [
        ("person", "people"),
        ("Person", "People"),
        ("PERSON", "PEOPLE"),
        ("FancyPerson", "FancyPeople"),
        ("salesperson", "salespeople"),
        ("ox", "oxen"),
        ("quiz", "quizzes"),
        ("matrix", "matrices"),
        ("status", "statuses"),
        ("Category", "Categories"),
    ];
    for test in plurals {
        assert_eq!(inflection::plural(test.0), test.1, "plural({})", test.0);
    }

    let singulars = [
        ("people", "person"),
        ("buses", "bus"),
        ("oxen", "ox"),
        ("Categories", "Category"),
        ("DATABASES", "DATABASE"),
    ];
    for test in singulars {
        assert_eq!(inflection::singular(test.0), test.1, "singular({})", test.0);
    }
}

#[test]
fn process_wide_rules() {
    check_built_in_rules();

    assert_eq!(inflection::get_plural().len(), 21);
    assert_eq!(inflection::get_singular().len(), 28);
    assert_eq!(inflection::get_irregular().len(), 6);
    assert_eq!(inflection::get_uncountable().len(), 10);

    inflection::add_irregular("criterion", "criteria").unwrap();
    assert_eq!(inflection::plural("Criterion"), "Criteria");
    assert_eq!(inflection::singular("criteria"), "criterion");
    assert_eq!(
        inflection::get_irregular().last(),
        Some(&Irregular::new("criterion", "criteria"))
    );

    inflection::add_plural("(bu)s$", "${1}ses").unwrap();
    assert_eq!(inflection::plural("bus"), "buses");
    assert_eq!(inflection::plural("BUS"), "BUSES");
    assert_eq!(
        inflection::get_plural().last(),
        Some(&Regular::new("(bu)s$", "${1}ses"))
    );

    inflection::add_singular("(bus)(es)?$", "${1}").unwrap();
    assert_eq!(inflection::singular("Buses"), "Bus");
    assert_eq!(inflection::get_singular().len(), 29);

    let mut snapshot = inflection::get_plural();
    snapshot.clear();
    assert_eq!(inflection::plural("dog"), "dogs");

    assert!(matches!(
        inflection::add_plural("(bad", ""),
        Err(Error::InvalidPattern { .. })
    ));
    assert_eq!(inflection::get_plural().len(), 22);

    assert_eq!(inflection::plural("fish"), "fish");
    inflection::set_uncountable(vec![]).unwrap();
    assert_eq!(inflection::plural("fish"), "fishes");
    inflection::add_uncountable("fish").unwrap();
    assert_eq!(inflection::plural("Fish"), "Fish");

    inflection::edit(|rules| {
        rules.irregulars.push(Irregular::new("goose", "geese"));
        rules.uncountables.push("deer".to_string());
    })
    .unwrap();
    assert_eq!(inflection::plural("goose"), "geese");
    assert_eq!(inflection::plural("deer"), "deer");

    inflection::load_rules("<irregular> tooth => teeth\n").unwrap();
    assert_eq!(inflection::plural("Tooth"), "Teeth");

    // A panic inside an edit poisons the lock, but the rules and the compiled
    // matchers must still agree afterwards.
    let result = std::panic::catch_unwind(|| {
        let _ = inflection::edit(|rules| {
            rules.plurals.clear();
            panic!("gave up halfway through an edit");
        });
    });
    assert!(result.is_err());
    assert_eq!(inflection::get_plural().len(), 22);
    assert_eq!(inflection::plural("dog"), "dogs");
    assert_eq!(inflection::plural("Tooth"), "Teeth");

    inflection::set_irregular(vec![]).unwrap();
    assert_eq!(inflection::plural("person"), "persons");

    inflection::set_singular(vec![Regular::new("s$", "")]).unwrap();
    assert_eq!(inflection::singular("Teeth"), "Teeth");
    assert_eq!(inflection::singular("Cats"), "Cat");

    inflection::set_plural(vec![Regular::new("([a-z])$", "${1}s")]).unwrap();
    assert_eq!(inflection::plural("mouse"), "mouses");
    assert_eq!(inflection::plural("Fish"), "Fish");
}
