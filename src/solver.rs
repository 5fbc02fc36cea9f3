//! Solver and decomposer identifiers as announced by the wrapper header.
//!
//! The names are part of the external contract: the wrapper prints
//! `c solver <name>` and `c decomposer <name>` before the solver starts, and
//! the postprocessor selects its body interpreter from them.

use crate::errors::PostprocessError;

/// Role played by a member of the decomposition/counting family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DpmcRole {
    /// Only builds join trees (`planner`).
    Planning,
    /// Only counts over a given join tree (`dmc`).
    Counting,
    /// Plans and counts in one pipeline (`dpmc`).
    Combined,
}

/// Every solver the postprocessor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    Dpmc(DpmcRole),
    Erssat,
    Dcssat,
    /// countAntom
    Antom,
    Nesthdb,
    D4p,
    Projmc,
    /// CryptoMiniSat
    Minisat,
}

impl SolverKind {
    pub const PLANNER: SolverKind = SolverKind::Dpmc(DpmcRole::Planning);
    pub const DMC: SolverKind = SolverKind::Dpmc(DpmcRole::Counting);
    pub const DPMC: SolverKind = SolverKind::Dpmc(DpmcRole::Combined);

    /// All solvers in declaration order.
    pub const ALL: [SolverKind; 10] = [
        Self::PLANNER,
        Self::DMC,
        Self::DPMC,
        SolverKind::Erssat,
        SolverKind::Dcssat,
        SolverKind::Antom,
        SolverKind::Nesthdb,
        SolverKind::D4p,
        SolverKind::Projmc,
        SolverKind::Minisat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SolverKind::Dpmc(DpmcRole::Planning) => "planner",
            SolverKind::Dpmc(DpmcRole::Counting) => "dmc",
            SolverKind::Dpmc(DpmcRole::Combined) => "dpmc",
            SolverKind::Erssat => "erssat",
            SolverKind::Dcssat => "dcssat",
            SolverKind::Antom => "antom",
            SolverKind::Nesthdb => "nesthdb",
            SolverKind::D4p => "d4p",
            SolverKind::Projmc => "projmc",
            SolverKind::Minisat => "minisat",
        }
    }

    /// The decomposition-family role, if this solver belongs to that family.
    pub fn dpmc_role(&self) -> Option<DpmcRole> {
        match self {
            SolverKind::Dpmc(role) => Some(*role),
            _ => None,
        }
    }

    /// True only for the pure-counting role, whose wall time excludes planning.
    pub fn is_counting_only(&self) -> bool {
        self.dpmc_role() == Some(DpmcRole::Counting)
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SolverKind {
    type Err = PostprocessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PostprocessError::UnknownSolver(s.to_string()))
    }
}

/// Tree-decomposition tool used by the planning role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decomposer {
    Htb,
    Htd,
    Flow,
}

impl std::fmt::Display for Decomposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decomposer::Htb => write!(f, "htb"),
            Decomposer::Htd => write!(f, "htd"),
            Decomposer::Flow => write!(f, "flow"),
        }
    }
}

impl std::str::FromStr for Decomposer {
    type Err = PostprocessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "htb" => Ok(Decomposer::Htb),
            "htd" => Ok(Decomposer::Htd),
            "flow" => Ok(Decomposer::Flow),
            _ => Err(PostprocessError::UnknownDecomposer(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_names_round_trip() {
        for kind in SolverKind::ALL {
            assert_eq!(kind.name().parse::<SolverKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_solver_is_rejected() {
        let err = "cachet".parse::<SolverKind>().unwrap_err();
        assert!(matches!(err, PostprocessError::UnknownSolver(ref name) if name == "cachet"));
    }

    #[test]
    fn test_solver_names_are_case_sensitive() {
        assert!("DMC".parse::<SolverKind>().is_err());
    }

    #[test]
    fn test_dpmc_roles() {
        assert_eq!(SolverKind::PLANNER.dpmc_role(), Some(DpmcRole::Planning));
        assert_eq!(SolverKind::DPMC.dpmc_role(), Some(DpmcRole::Combined));
        assert_eq!(SolverKind::Minisat.dpmc_role(), None);
        assert!(SolverKind::DMC.is_counting_only());
        assert!(!SolverKind::DPMC.is_counting_only());
        assert!(!SolverKind::Antom.is_counting_only());
    }

    #[test]
    fn test_decomposer_parse() {
        assert_eq!("flow".parse::<Decomposer>().unwrap(), Decomposer::Flow);
        assert_eq!("htb".parse::<Decomposer>().unwrap(), Decomposer::Htb);
        assert_eq!(Decomposer::Htd.to_string(), "htd");
        assert!(matches!(
            "tamaki".parse::<Decomposer>(),
            Err(PostprocessError::UnknownDecomposer(_))
        ));
    }
}
