#![allow(dead_code)]

use survey_charts::data::{Dataset, TableKind, read_table};

pub const HEALTH_CSV: &str = "\
Year,Country,Sex,Fruit Consumption (%),Vegetable Consumption (%),Healthy (%),SPH
2018,France,Total,30,40,80,85
2018,France,Male,28,38,81,86
2018,France,Female,32,42,79,84
2018,Italy,Total,35,30,75,88
2018,Italy,Male,33,28,76,89
2018,Italy,Female,37,32,74,87
2018,Netherlands,Total,25,35,85,90
2018,Netherlands,Male,24,34,86,91
2018,Netherlands,Female,26,36,84,89
2022,France,Total,40,45,78,83
2022,France,Male,38,43,79,84
2022,France,Female,42,47,77,82
2022,Italy,Total,45,35,73,86
2022,Italy,Male,43,33,74,87
2022,Italy,Female,47,37,72,85
2022,Netherlands,Total,20,30,83,92
2022,Netherlands,Male,19,29,84,93
2022,Netherlands,Female,21,31,82,91
";

pub const SPORTS_CSV: &str = "\
Year,Country,SPH,Overweight (%),Obese (%),Overweight or Obese (%),Healthy (%),Exercise Frequency (Regularly),Exercise Frequency (Some Regularity),Exercise Frequency (Never),Moderate Activity (> 60 min),Moderate Activity (< 60 min),Moderate Activity (Never),Vigorous Activity (> 60 min),Vigorous Activity (< 60 min),Vigorous Activity (Never)
2018,France,85,15,4,19,81,40,30,30,20,50,30,25,45,30
2018,Italy,88,20,5,25,75,35,30,35,18,52,30,20,40,40
2018,Netherlands,90,10,2,12,88,50,30,20,30,50,20,35,45,20
2022,France,83,16,5,21,79,42,28,30,22,48,30,27,43,30
2022,Italy,86,22,6,28,72,36,29,35,19,51,30,21,39,40
2022,Netherlands,92,12,3,15,85,52,30,18,32,50,18,38,44,18
";

pub fn dataset() -> Dataset {
    dataset_from(HEALTH_CSV, SPORTS_CSV)
}

pub fn dataset_from(health_csv: &str, sports_csv: &str) -> Dataset {
    let health = read_table(TableKind::Health, health_csv.as_bytes()).expect("health table");
    let sports = read_table(TableKind::Sports, sports_csv.as_bytes()).expect("sports table");
    Dataset::new(health, sports).expect("dataset")
}
