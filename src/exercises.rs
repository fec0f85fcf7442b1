//! Exercise catalog - curated bilingual exercise table with media ids

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plan::PlanExercise;

/// Display language for exercise names
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unrecognized language code or category tag
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownTagError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Language {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            _ => Err(UnknownTagError { kind: "language", value: s.to_string() }),
        }
    }
}

/// Muscle group tag of a catalog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chest,      // Pecho
    Back,       // Espalda
    Shoulders,  // Hombros
    Biceps,     // Bíceps
    Triceps,    // Tríceps
    Quads,      // Cuádriceps
    Hamstrings, // Isquiotibiales
    Glutes,     // Glúteos
    Calves,     // Gemelos
    Core,       // Abdomen
}

impl Category {
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Chest => "chest",
            Category::Back => "back",
            Category::Shoulders => "shoulders",
            Category::Biceps => "biceps",
            Category::Triceps => "triceps",
            Category::Quads => "quads",
            Category::Hamstrings => "hamstrings",
            Category::Glutes => "glutes",
            Category::Calves => "calves",
            Category::Core => "core",
        }
    }

    pub fn name(&self, language: Language) -> &'static str {
        match (self, language) {
            (Category::Chest, Language::Es) => "Pecho",
            (Category::Back, Language::Es) => "Espalda",
            (Category::Shoulders, Language::Es) => "Hombros",
            (Category::Biceps, Language::Es) => "Bíceps",
            (Category::Triceps, Language::Es) => "Tríceps",
            (Category::Quads, Language::Es) => "Cuádriceps",
            (Category::Hamstrings, Language::Es) => "Isquiotibiales",
            (Category::Glutes, Language::Es) => "Glúteos",
            (Category::Calves, Language::Es) => "Gemelos",
            (Category::Core, Language::Es) => "Abdomen",
            (Category::Chest, Language::En) => "Chest",
            (Category::Back, Language::En) => "Back",
            (Category::Shoulders, Language::En) => "Shoulders",
            (Category::Biceps, Language::En) => "Biceps",
            (Category::Triceps, Language::En) => "Triceps",
            (Category::Quads, Language::En) => "Quadriceps",
            (Category::Hamstrings, Language::En) => "Hamstrings",
            (Category::Glutes, Language::En) => "Glutes",
            (Category::Calves, Language::En) => "Calves",
            (Category::Core, Language::En) => "Core",
        }
    }

    /// All categories for iteration
    pub fn all() -> &'static [Category] {
        &[
            Category::Chest,
            Category::Back,
            Category::Shoulders,
            Category::Biceps,
            Category::Triceps,
            Category::Quads,
            Category::Hamstrings,
            Category::Glutes,
            Category::Calves,
            Category::Core,
        ]
    }
}

impl FromStr for Category {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.tag() == tag)
            .ok_or_else(|| UnknownTagError { kind: "category", value: s.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name_es: &'static str,
    pub name_en: &'static str,
    pub external_media_id: &'static str, // shared by variants of one movement
    pub category: Category,
    pub equipment: Option<&'static str>,
    pub default_sets: &'static str,
    pub default_reps: &'static str,
    pub default_rest: &'static str,
    pub default_note: Option<&'static str>,
}

impl CatalogEntry {
    pub fn name(&self, language: Language) -> &'static str {
        display_name(self, language)
    }

    /// Seed a plan exercise from this entry's defaults (autocomplete pick)
    pub fn to_plan_exercise(&self, language: Language) -> PlanExercise {
        PlanExercise {
            id: self.id.to_string(),
            name: self.name(language).to_string(),
            sets: self.default_sets.to_string(),
            reps: self.default_reps.to_string(),
            rest: Some(self.default_rest.to_string()),
            external_media_id: Some(self.external_media_id.to_string()),
            note: self.default_note.map(str::to_string),
        }
    }
}

/// Catálogo de ejercicios. Order matters: name matching scans it top to bottom.
pub const CATALOG: &[CatalogEntry] = &[
    // Pecho
    CatalogEntry {
        id: "bench_press_barbell",
        name_es: "Press Banco Plano con Barra",
        name_en: "Barbell Bench Press",
        external_media_id: "0025",
        category: Category::Chest,
        equipment: Some("barbell"),
        default_sets: "4",
        default_reps: "6-8",
        default_rest: "2-3 min",
        default_note: Some("Escápulas retraídas, pies firmes en el suelo"),
    },
    CatalogEntry {
        id: "incline_press_barbell",
        name_es: "Press Inclinado con Barra",
        name_en: "Incline Barbell Bench Press",
        external_media_id: "0047",
        category: Category::Chest,
        equipment: Some("barbell"),
        default_sets: "4",
        default_reps: "8-10",
        default_rest: "2 min",
        default_note: None,
    },
    CatalogEntry {
        id: "bench_press_dumbbell",
        name_es: "Press Banco Plano con Mancuernas",
        name_en: "Dumbbell Bench Press",
        external_media_id: "0289",
        category: Category::Chest,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "8-12",
        default_rest: "90s",
        default_note: None,
    },
    CatalogEntry {
        id: "incline_press_dumbbell",
        name_es: "Press Inclinado con Mancuernas",
        name_en: "Incline Dumbbell Press",
        external_media_id: "0314",
        category: Category::Chest,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "8-12",
        default_rest: "90s",
        default_note: None,
    },
    CatalogEntry {
        id: "chest_fly_dumbbell",
        name_es: "Aperturas con Mancuernas",
        name_en: "Dumbbell Fly",
        external_media_id: "0308",
        category: Category::Chest,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: Some("Codos ligeramente flexionados"),
    },
    CatalogEntry {
        id: "cable_crossover",
        name_es: "Cruce de Poleas",
        name_en: "Cable Crossover",
        external_media_id: "0160",
        category: Category::Chest,
        equipment: Some("cable"),
        default_sets: "3",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "pec_deck",
        name_es: "Contractor de Pecho",
        name_en: "Pec Deck Fly",
        external_media_id: "1030",
        category: Category::Chest,
        equipment: Some("machine"),
        default_sets: "3",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "chest_dips",
        name_es: "Fondos en Paralelas",
        name_en: "Chest Dips",
        external_media_id: "0251",
        category: Category::Chest,
        equipment: Some("bodyweight"),
        default_sets: "3",
        default_reps: "8-12",
        default_rest: "90s",
        default_note: Some("Inclinar el torso hacia delante"),
    },
    CatalogEntry {
        id: "push_up",
        name_es: "Flexiones",
        name_en: "Push-up",
        external_media_id: "0662",
        category: Category::Chest,
        equipment: Some("bodyweight"),
        default_sets: "3",
        default_reps: "15-20",
        default_rest: "60s",
        default_note: None,
    },
    // Espalda
    CatalogEntry {
        id: "deadlift",
        name_es: "Peso Muerto",
        name_en: "Deadlift",
        external_media_id: "0032",
        category: Category::Back,
        equipment: Some("barbell"),
        default_sets: "3",
        default_reps: "5",
        default_rest: "3 min",
        default_note: Some("Espalda neutra durante todo el recorrido"),
    },
    CatalogEntry {
        id: "pull_up",
        name_es: "Dominadas",
        name_en: "Pull-up",
        external_media_id: "0652",
        category: Category::Back,
        equipment: Some("bodyweight"),
        default_sets: "4",
        default_reps: "6-10",
        default_rest: "2 min",
        default_note: None,
    },
    CatalogEntry {
        id: "lat_pulldown",
        name_es: "Jalón al Pecho",
        name_en: "Lat Pulldown",
        external_media_id: "0150",
        category: Category::Back,
        equipment: Some("cable"),
        default_sets: "4",
        default_reps: "10-12",
        default_rest: "90s",
        default_note: None,
    },
    CatalogEntry {
        id: "barbell_row",
        name_es: "Remo con Barra",
        name_en: "Barbell Bent Over Row",
        external_media_id: "0027",
        category: Category::Back,
        equipment: Some("barbell"),
        default_sets: "4",
        default_reps: "8-10",
        default_rest: "2 min",
        default_note: None,
    },
    CatalogEntry {
        id: "dumbbell_row",
        name_es: "Remo con Mancuerna a Una Mano",
        name_en: "One Arm Dumbbell Row",
        external_media_id: "0293",
        category: Category::Back,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "90s",
        default_note: None,
    },
    CatalogEntry {
        id: "seated_cable_row",
        name_es: "Remo en Polea Baja",
        name_en: "Seated Cable Row",
        external_media_id: "0861",
        category: Category::Back,
        equipment: Some("cable"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "90s",
        default_note: None,
    },
    CatalogEntry {
        id: "t_bar_row",
        name_es: "Remo en Punta",
        name_en: "T-Bar Row",
        external_media_id: "0606",
        category: Category::Back,
        equipment: Some("barbell"),
        default_sets: "3",
        default_reps: "8-10",
        default_rest: "2 min",
        default_note: None,
    },
    // Hombros
    CatalogEntry {
        id: "overhead_press",
        name_es: "Press Militar con Barra",
        name_en: "Overhead Press",
        external_media_id: "1457",
        category: Category::Shoulders,
        equipment: Some("barbell"),
        default_sets: "4",
        default_reps: "6-8",
        default_rest: "2-3 min",
        default_note: None,
    },
    CatalogEntry {
        id: "dumbbell_shoulder_press",
        name_es: "Press de Hombros con Mancuernas",
        name_en: "Dumbbell Shoulder Press",
        external_media_id: "0405",
        category: Category::Shoulders,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "8-12",
        default_rest: "90s",
        default_note: None,
    },
    CatalogEntry {
        id: "lateral_raise",
        name_es: "Elevaciones Laterales",
        name_en: "Dumbbell Lateral Raise",
        external_media_id: "0334",
        category: Category::Shoulders,
        equipment: Some("dumbbell"),
        default_sets: "4",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: Some("Subir hasta la altura de los hombros"),
    },
    CatalogEntry {
        id: "front_raise",
        name_es: "Elevaciones Frontales",
        name_en: "Dumbbell Front Raise",
        external_media_id: "0310",
        category: Category::Shoulders,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "12",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "face_pull",
        name_es: "Face Pull en Polea",
        name_en: "Cable Face Pull",
        external_media_id: "0203",
        category: Category::Shoulders,
        equipment: Some("cable"),
        default_sets: "3",
        default_reps: "15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "rear_delt_fly",
        name_es: "Pájaros con Mancuernas",
        name_en: "Dumbbell Rear Delt Fly",
        external_media_id: "0380",
        category: Category::Shoulders,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: None,
    },
    // Bíceps
    CatalogEntry {
        id: "barbell_curl",
        name_es: "Curl con Barra",
        name_en: "Barbell Curl",
        external_media_id: "0031",
        category: Category::Biceps,
        equipment: Some("barbell"),
        default_sets: "3",
        default_reps: "8-12",
        default_rest: "90s",
        default_note: None,
    },
    CatalogEntry {
        id: "dumbbell_curl",
        name_es: "Curl con Mancuernas",
        name_en: "Dumbbell Biceps Curl",
        external_media_id: "0294",
        category: Category::Biceps,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "hammer_curl",
        name_es: "Curl Martillo",
        name_en: "Hammer Curl",
        external_media_id: "0313",
        category: Category::Biceps,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "preacher_curl",
        name_es: "Curl en Banco Scott",
        name_en: "Preacher Curl",
        external_media_id: "0070",
        category: Category::Biceps,
        equipment: Some("barbell"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "60s",
        default_note: None,
    },
    // Tríceps
    CatalogEntry {
        id: "triceps_pushdown",
        name_es: "Extensión de Tríceps en Polea",
        name_en: "Triceps Pushdown",
        external_media_id: "0201",
        category: Category::Triceps,
        equipment: Some("cable"),
        default_sets: "3",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "skull_crusher",
        name_es: "Press Francés",
        name_en: "Skull Crusher",
        external_media_id: "0060",
        category: Category::Triceps,
        equipment: Some("ez bar"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "90s",
        default_note: None,
    },
    CatalogEntry {
        id: "overhead_triceps_extension",
        name_es: "Extensión de Tríceps sobre la Cabeza",
        name_en: "Overhead Triceps Extension",
        external_media_id: "0430",
        category: Category::Triceps,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "close_grip_bench",
        name_es: "Press Banca Agarre Cerrado",
        name_en: "Close Grip Bench Press",
        external_media_id: "0030",
        category: Category::Triceps,
        equipment: Some("barbell"),
        default_sets: "3",
        default_reps: "8-10",
        default_rest: "2 min",
        default_note: None,
    },
    // Cuádriceps
    CatalogEntry {
        id: "back_squat",
        name_es: "Sentadilla con Barra",
        name_en: "Barbell Back Squat",
        external_media_id: "0043",
        category: Category::Quads,
        equipment: Some("barbell"),
        default_sets: "4",
        default_reps: "6-8",
        default_rest: "3 min",
        default_note: Some("Romper el paralelo sin perder la curva lumbar"),
    },
    CatalogEntry {
        id: "front_squat",
        name_es: "Sentadilla Frontal",
        name_en: "Front Squat",
        external_media_id: "0042",
        category: Category::Quads,
        equipment: Some("barbell"),
        default_sets: "4",
        default_reps: "6-8",
        default_rest: "2-3 min",
        default_note: None,
    },
    CatalogEntry {
        id: "hack_squat",
        name_es: "Sentadilla Hack",
        name_en: "Hack Squat",
        external_media_id: "1420",
        category: Category::Quads,
        equipment: Some("machine"),
        default_sets: "4",
        default_reps: "8-12",
        default_rest: "2 min",
        default_note: None,
    },
    CatalogEntry {
        id: "leg_press",
        name_es: "Prensa de Piernas",
        name_en: "Leg Press",
        external_media_id: "0739",
        category: Category::Quads,
        equipment: Some("machine"),
        default_sets: "4",
        default_reps: "10-12",
        default_rest: "2 min",
        default_note: None,
    },
    CatalogEntry {
        id: "leg_extension",
        name_es: "Extensión de Cuádriceps",
        name_en: "Leg Extension",
        external_media_id: "0585",
        category: Category::Quads,
        equipment: Some("machine"),
        default_sets: "3",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "bulgarian_split_squat",
        name_es: "Sentadilla Búlgara",
        name_en: "Bulgarian Split Squat",
        external_media_id: "0410",
        category: Category::Quads,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "8-10",
        default_rest: "90s",
        default_note: Some("Por pierna"),
    },
    CatalogEntry {
        id: "walking_lunge",
        name_es: "Zancadas",
        name_en: "Walking Lunge",
        external_media_id: "1460",
        category: Category::Quads,
        equipment: Some("dumbbell"),
        default_sets: "3",
        default_reps: "12",
        default_rest: "90s",
        default_note: None,
    },
    // Isquiotibiales
    CatalogEntry {
        id: "romanian_deadlift",
        name_es: "Peso Muerto Rumano",
        name_en: "Romanian Deadlift",
        external_media_id: "0085",
        category: Category::Hamstrings,
        equipment: Some("barbell"),
        default_sets: "3",
        default_reps: "8-10",
        default_rest: "2 min",
        default_note: None,
    },
    CatalogEntry {
        id: "lying_leg_curl",
        name_es: "Curl Femoral Tumbado",
        name_en: "Lying Leg Curl",
        external_media_id: "0586",
        category: Category::Hamstrings,
        equipment: Some("machine"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "seated_leg_curl",
        name_es: "Curl Femoral Sentado",
        name_en: "Seated Leg Curl",
        external_media_id: "0599",
        category: Category::Hamstrings,
        equipment: Some("machine"),
        default_sets: "3",
        default_reps: "10-12",
        default_rest: "60s",
        default_note: None,
    },
    // Glúteos
    CatalogEntry {
        id: "hip_thrust",
        name_es: "Hip Thrust con Barra",
        name_en: "Barbell Hip Thrust",
        external_media_id: "1409",
        category: Category::Glutes,
        equipment: Some("barbell"),
        default_sets: "4",
        default_reps: "8-12",
        default_rest: "2 min",
        default_note: Some("Pausa de un segundo arriba"),
    },
    CatalogEntry {
        id: "glute_bridge",
        name_es: "Puente de Glúteos",
        name_en: "Glute Bridge",
        external_media_id: "1409",
        category: Category::Glutes,
        equipment: None,
        default_sets: "3",
        default_reps: "15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "cable_kickback",
        name_es: "Patada de Glúteo en Polea",
        name_en: "Cable Glute Kickback",
        external_media_id: "0228",
        category: Category::Glutes,
        equipment: Some("cable"),
        default_sets: "3",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "hip_abduction",
        name_es: "Abducción de Cadera en Máquina",
        name_en: "Hip Abduction Machine",
        external_media_id: "0597",
        category: Category::Glutes,
        equipment: Some("machine"),
        default_sets: "3",
        default_reps: "15-20",
        default_rest: "60s",
        default_note: None,
    },
    // Gemelos
    CatalogEntry {
        id: "standing_calf_raise",
        name_es: "Elevación de Talones de Pie",
        name_en: "Standing Calf Raise",
        external_media_id: "1372",
        category: Category::Calves,
        equipment: Some("machine"),
        default_sets: "4",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "seated_calf_raise",
        name_es: "Elevación de Talones Sentado",
        name_en: "Seated Calf Raise",
        external_media_id: "0594",
        category: Category::Calves,
        equipment: Some("machine"),
        default_sets: "3",
        default_reps: "15-20",
        default_rest: "60s",
        default_note: None,
    },
    // Abdomen
    CatalogEntry {
        id: "plank",
        name_es: "Plancha",
        name_en: "Plank",
        external_media_id: "0464",
        category: Category::Core,
        equipment: None,
        default_sets: "3",
        default_reps: "30-60 s",
        default_rest: "60s",
        default_note: Some("Cuerpo alineado, glúteos apretados"),
    },
    CatalogEntry {
        id: "hanging_leg_raise",
        name_es: "Elevación de Piernas Colgado",
        name_en: "Hanging Leg Raise",
        external_media_id: "0472",
        category: Category::Core,
        equipment: Some("bodyweight"),
        default_sets: "3",
        default_reps: "10-15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "cable_crunch",
        name_es: "Crunch en Polea",
        name_en: "Cable Crunch",
        external_media_id: "0175",
        category: Category::Core,
        equipment: Some("cable"),
        default_sets: "3",
        default_reps: "12-15",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "ab_wheel",
        name_es: "Rueda Abdominal",
        name_en: "Ab Wheel Rollout",
        external_media_id: "0857",
        category: Category::Core,
        equipment: Some("ab wheel"),
        default_sets: "3",
        default_reps: "8-12",
        default_rest: "60s",
        default_note: None,
    },
    CatalogEntry {
        id: "russian_twist",
        name_es: "Giro Ruso",
        name_en: "Russian Twist",
        external_media_id: "0687",
        category: Category::Core,
        equipment: None,
        default_sets: "3",
        default_reps: "20",
        default_rest: "45s",
        default_note: None,
    },
];

pub fn all_exercises() -> &'static [CatalogEntry] {
    CATALOG
}

pub fn by_category(category: Category) -> Vec<&'static CatalogEntry> {
    CATALOG.iter().filter(|e| e.category == category).collect()
}

pub fn find_exercise(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id == id)
}

pub fn display_name(entry: &CatalogEntry, language: Language) -> &'static str {
    match language {
        Language::Es => entry.name_es,
        Language::En => entry.name_en,
    }
}

/// All display names in one language, catalog order (autocomplete source)
pub fn exercise_names(language: Language) -> Vec<&'static str> {
    CATALOG.iter().map(|e| display_name(e, language)).collect()
}
