//! Bundled read-only reference data: historical chapter weightage tables
//! and coaching-institute syllabi.

use crate::syllabus::{InstituteSyllabus, TimelineEntry};
use crate::weightage::{ChapterWeights, HistoricalWeightage, Subject};

fn weights(entries: &[(&str, f64)]) -> ChapterWeights {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

/// Three years of observed per-chapter exam weight for each subject.
pub fn historical_weightage() -> HistoricalWeightage {
    let mut data = HistoricalWeightage::new();

    data.insert_year(
        Subject::Physics,
        "2023",
        weights(&[
            ("Kinematics", 8.0),
            ("Laws of Motion", 7.0),
            ("Work, Energy, Power", 6.0),
            ("Rotational Motion", 9.0),
            ("Electrostatics", 10.0),
        ]),
    );
    data.insert_year(
        Subject::Physics,
        "2022",
        weights(&[
            ("Kinematics", 7.0),
            ("Laws of Motion", 8.0),
            ("Work, Energy, Power", 7.0),
            ("Rotational Motion", 8.0),
            ("Electrostatics", 11.0),
        ]),
    );
    data.insert_year(
        Subject::Physics,
        "2021",
        weights(&[
            ("Kinematics", 9.0),
            ("Laws of Motion", 6.0),
            ("Work, Energy, Power", 8.0),
            ("Rotational Motion", 7.0),
            ("Electrostatics", 9.0),
        ]),
    );

    data.insert_year(
        Subject::Chemistry,
        "2023",
        weights(&[
            ("Chemical Bonding", 12.0),
            ("Thermodynamics", 8.0),
            ("Equilibrium", 7.0),
            ("Organic Chemistry - Basics", 10.0),
            ("Coordination Compounds", 9.0),
        ]),
    );
    data.insert_year(
        Subject::Chemistry,
        "2022",
        weights(&[
            ("Chemical Bonding", 11.0),
            ("Thermodynamics", 9.0),
            ("Equilibrium", 8.0),
            ("Organic Chemistry - Basics", 11.0),
            ("Coordination Compounds", 8.0),
        ]),
    );
    data.insert_year(
        Subject::Chemistry,
        "2021",
        weights(&[
            ("Chemical Bonding", 13.0),
            ("Thermodynamics", 7.0),
            ("Equilibrium", 9.0),
            ("Organic Chemistry - Basics", 9.0),
            ("Coordination Compounds", 10.0),
        ]),
    );

    data.insert_year(
        Subject::Mathematics,
        "2023",
        weights(&[
            ("Calculus", 30.0),
            ("Coordinate Geometry", 20.0),
            ("Vectors & 3D Geometry", 15.0),
            ("Algebra", 25.0),
            ("Probability & Statistics", 10.0),
        ]),
    );
    data.insert_year(
        Subject::Mathematics,
        "2022",
        weights(&[
            ("Calculus", 32.0),
            ("Coordinate Geometry", 18.0),
            ("Vectors & 3D Geometry", 16.0),
            ("Algebra", 24.0),
            ("Probability & Statistics", 10.0),
        ]),
    );
    data.insert_year(
        Subject::Mathematics,
        "2021",
        weights(&[
            ("Calculus", 28.0),
            ("Coordinate Geometry", 22.0),
            ("Vectors & 3D Geometry", 14.0),
            ("Algebra", 26.0),
            ("Probability & Statistics", 10.0),
        ]),
    );

    data
}

fn entry(week: u32, chapters: &[&str]) -> TimelineEntry {
    TimelineEntry {
        week,
        chapters: chapters.iter().map(|s| s.to_string()).collect(),
    }
}

fn names(chapters: &[&str]) -> Vec<String> {
    chapters.iter().map(|s| s.to_string()).collect()
}

/// Built-in first-month timelines for the bundled coaching institutes.
pub fn coaching_syllabi() -> Vec<InstituteSyllabus> {
    let all_chapters = names(&[
        "Kinematics",
        "Laws of Motion",
        "Work, Energy, Power",
        "Rotational Motion",
        "Electrostatics",
        "Chemical Bonding",
        "Thermodynamics",
        "Equilibrium",
        "Organic Chemistry - Basics",
        "Coordination Compounds",
        "Calculus",
        "Coordinate Geometry",
        "Vectors & 3D Geometry",
        "Algebra",
        "Probability & Statistics",
    ]);

    vec![
        InstituteSyllabus {
            name: "Allen Kota".into(),
            chapters: names(&[
                "Kinematics",
                "Laws of Motion",
                "Chemical Bonding",
                "Calculus",
                "Coordinate Geometry",
                "Organic Chemistry - Basics",
                "Work, Energy, Power",
                "Thermodynamics",
                "Equilibrium",
                "Algebra",
                "Rotational Motion",
                "Electrostatics",
            ]),
            timeline: vec![
                entry(1, &["Kinematics"]),
                entry(2, &["Laws of Motion", "Chemical Bonding"]),
                entry(3, &["Calculus"]),
                entry(4, &["Coordinate Geometry", "Organic Chemistry - Basics"]),
            ],
        },
        InstituteSyllabus {
            name: "Aakash Institute".into(),
            chapters: names(&[
                "Chemical Bonding",
                "Kinematics",
                "Calculus",
                "Laws of Motion",
                "Organic Chemistry - Basics",
                "Coordinate Geometry",
                "Vectors & 3D Geometry",
                "Thermodynamics",
                "Rotational Motion",
            ]),
            timeline: vec![
                entry(1, &["Chemical Bonding"]),
                entry(2, &["Kinematics", "Calculus"]),
                entry(3, &["Laws of Motion"]),
                entry(4, &["Organic Chemistry - Basics", "Coordinate Geometry"]),
            ],
        },
        InstituteSyllabus {
            name: "FIITJEE".into(),
            chapters: names(&[
                "Calculus",
                "Electrostatics",
                "Chemical Bonding",
                "Kinematics",
                "Coordinate Geometry",
                "Algebra",
                "Thermodynamics",
                "Laws of Motion",
                "Work, Energy, Power",
                "Probability & Statistics",
            ]),
            timeline: vec![
                entry(1, &["Calculus"]),
                entry(2, &["Electrostatics", "Chemical Bonding"]),
                entry(3, &["Kinematics"]),
                entry(4, &["Coordinate Geometry", "Algebra"]),
            ],
        },
        InstituteSyllabus {
            name: "Physics Wallah".into(),
            chapters: all_chapters.clone(),
            timeline: vec![
                entry(1, &["Kinematics", "Chemical Bonding"]),
                entry(2, &["Calculus"]),
                entry(3, &["Laws of Motion", "Organic Chemistry - Basics"]),
                entry(4, &["Work, Energy, Power"]),
            ],
        },
        InstituteSyllabus {
            name: "Bakliwal Tutorials".into(),
            chapters: all_chapters,
            timeline: vec![
                entry(1, &["Calculus"]),
                entry(2, &["Coordinate Geometry"]),
                entry(3, &["Kinematics", "Chemical Bonding"]),
                entry(4, &["Laws of Motion", "Algebra"]),
            ],
        },
    ]
}
