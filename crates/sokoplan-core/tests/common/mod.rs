//! Shared fixtures for the integration suites.

/// The 2x2 reference world: robot on the docking station, one block, one
/// wall, one goal.
pub const WORLD_2X2: &str = r#"{
    "version": "1.0",
    "world": {
        "rows": 2,
        "columns": 2,
        "cells": [
            { "x": 0, "y": 0, "entities": "RD" },
            { "x": 1, "y": 0, "entities": "B" },
            { "x": 0, "y": 1, "entities": "U" },
            { "x": 1, "y": 1, "entities": "G" }
        ]
    }
}"#;

/// A single-cell world containing only the robot.
pub const WORLD_1X1: &str = r#"{
    "version": "1.0",
    "world": {
        "rows": 1,
        "columns": 1,
        "cells": [ { "x": 0, "y": 0, "entities": "R" } ]
    }
}"#;

/// A solution in the v1 push-domain format, with comments and a blank line.
pub const PUSH_SOLUTION: &str = "\
; Version LPG-td-1.0
; Seed 86997079
; Time 0.01

0:   (MOVE PLAYER-01 POS-05-08 POS-04-08 DIR-LEFT) [1]
1:   (PUSH-TO-NONGOAL PLAYER-01 STONE-02 POS-08-05 POS-08-06 POS-08-07 DIR-DOWN) [1]
2:   (PUSH-TO-GOAL PLAYER-01 STONE-02 POS-08-03 POS-08-04 POS-08-05 DIR-DOWN) [1]
";

/// A solution in the v2 pull-domain format.
pub const PULL_SOLUTION: &str = "\
0: (MOVE PLAYER-01 POS-02-02 POS-02-03 DIR-DOWN) [1]
1: (PULL-TO-GOAL PLAYER-01 STONE-00 POS-02-03 POS-02-04 POS-02-03 DIR-UP) [1]
2: (PULL-TO-NONGOAL PLAYER-01 STONE-01 POS-03-03 POS-04-03 POS-03-03 DIR-LEFT) [1]
";
