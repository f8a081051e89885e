use crate::error::KenoError;

/// Format de jeu : tous deux tirent dans le domaine 1-66.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameFormat {
    /// Keno 9/66 : tirages de 9 numéros, combinaisons de 9.
    Keno9,
    /// Variante 12/66 : tirages de 12 numéros, combinaisons de 4.
    Keno12,
}

impl GameFormat {
    pub fn domain_max(&self) -> u8 {
        66
    }

    /// Nombre de numéros d'un tirage historique.
    pub fn draw_size(&self) -> usize {
        match self {
            GameFormat::Keno9 => 9,
            GameFormat::Keno12 => 12,
        }
    }

    /// Taille des combinaisons générées.
    pub fn combo_size(&self) -> usize {
        match self {
            GameFormat::Keno9 => 9,
            GameFormat::Keno12 => 4,
        }
    }

    /// Taille du noyau fixe de la stratégie wheel.
    pub fn core_size(&self) -> usize {
        match self {
            GameFormat::Keno9 => 5,
            GameFormat::Keno12 => 2,
        }
    }
}

/// Un tirage historique, tel que parsé depuis l'entrée utilisateur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub numbers: Vec<u8>,
}

/// Une combinaison candidate : numéros uniques, triés, dans le domaine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub numbers: Vec<u8>,
}

impl Combination {
    /// Numéros joints par des espaces, pour l'affichage et l'export texte.
    pub fn joined(&self) -> String {
        self.numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Vraie si tous les numéros de la combinaison figurent dans le tirage.
    pub fn is_covered_by(&self, draw: &Draw) -> bool {
        self.numbers.iter().all(|n| draw.numbers.contains(n))
    }
}

/// Une combinaison couverte par un tirage historique (indices en base 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchHit {
    pub combination: usize,
    pub draw: usize,
}

/// Vérifie qu'une ligne de tirage respecte le format (taille, bornes, doublons).
pub fn validate_draw(numbers: &[u8], format: GameFormat) -> Result<(), KenoError> {
    if numbers.len() != format.draw_size() {
        return Err(KenoError::MalformedInput(format!(
            "{} numéros au lieu de {}",
            numbers.len(),
            format.draw_size()
        )));
    }
    for &n in numbers {
        if n < 1 || n > format.domain_max() {
            return Err(KenoError::MalformedInput(format!(
                "numéro {} hors bornes (1-{})",
                n,
                format.domain_max()
            )));
        }
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                return Err(KenoError::MalformedInput(format!(
                    "numéro en double : {}",
                    numbers[i]
                )));
            }
        }
    }
    Ok(())
}

/// Vérifie une combinaison relue depuis un export (tri strict inclus).
pub fn validate_combination(numbers: &[u8], format: GameFormat) -> Result<(), KenoError> {
    if numbers.len() != format.combo_size() {
        return Err(KenoError::MalformedInput(format!(
            "{} numéros au lieu de {}",
            numbers.len(),
            format.combo_size()
        )));
    }
    for &n in numbers {
        if n < 1 || n > format.domain_max() {
            return Err(KenoError::MalformedInput(format!(
                "numéro {} hors bornes (1-{})",
                n,
                format.domain_max()
            )));
        }
    }
    for pair in numbers.windows(2) {
        if pair[0] >= pair[1] {
            return Err(KenoError::MalformedInput(format!(
                "numéros non strictement croissants : {} puis {}",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}
