//! The fixed mansion layout.

use tracing::debug;

use crate::room::Room;

/// Entrance hall, the root of the map.
pub const HALL: &str = "Hall de Entrada";
/// Left of the hall.
pub const COZINHA: &str = "Cozinha";
/// Right of the hall.
pub const BIBLIOTECA: &str = "Biblioteca";
/// Left of the kitchen. Dead end.
pub const DESPENSA: &str = "Despensa";
/// Right of the kitchen.
pub const SALA_DE_JANTAR: &str = "Sala de Jantar";
/// Left of the library.
pub const ESCRITORIO: &str = "Escritório";
/// Right of the library.
pub const QUARTO_PRINCIPAL: &str = "Quarto Principal";
/// Left of the dining room. Dead end.
pub const JARDIM_DE_INVERNO: &str = "Jardim de Inverno";
/// Right of the dining room. Dead end.
pub const COPA: &str = "Copa";
/// Left of the study. Dead end.
pub const ARQUIVO_SECRETO: &str = "Arquivo Secreto";
/// Right of the study; its only exit is to the right.
pub const CORREDOR_OESTE: &str = "Corredor Oeste";
/// Left of the master bedroom. Dead end.
pub const BANHEIRO_SUITE: &str = "Banheiro Suíte";
/// Right of the master bedroom. Dead end.
pub const VARANDA: &str = "Varanda";
/// Right of the west corridor. Dead end, the deepest room.
pub const QUARTO_DE_HOSPEDES: &str = "Quarto de Hóspedes";

/// Build the mansion map.
///
/// The layout never changes:
///
/// ```text
/// Hall de Entrada
/// ├── Cozinha
/// │   ├── Despensa
/// │   └── Sala de Jantar
/// │       ├── Jardim de Inverno
/// │       └── Copa
/// └── Biblioteca
///     ├── Escritório
///     │   ├── Arquivo Secreto
///     │   └── Corredor Oeste
///     │       └── (right) Quarto de Hóspedes
///     └── Quarto Principal
///         ├── Banheiro Suíte
///         └── Varanda
/// ```
pub fn build_mansion() -> Room {
    let sala_de_jantar = Room::new(SALA_DE_JANTAR)
        .with_left(Room::new(JARDIM_DE_INVERNO))
        .with_right(Room::new(COPA));
    let cozinha = Room::new(COZINHA)
        .with_left(Room::new(DESPENSA))
        .with_right(sala_de_jantar);

    let corredor_oeste = Room::new(CORREDOR_OESTE).with_right(Room::new(QUARTO_DE_HOSPEDES));
    let escritorio = Room::new(ESCRITORIO)
        .with_left(Room::new(ARQUIVO_SECRETO))
        .with_right(corredor_oeste);
    let quarto_principal = Room::new(QUARTO_PRINCIPAL)
        .with_left(Room::new(BANHEIRO_SUITE))
        .with_right(Room::new(VARANDA));
    let biblioteca = Room::new(BIBLIOTECA)
        .with_left(escritorio)
        .with_right(quarto_principal);

    let hall = Room::new(HALL).with_left(cozinha).with_right(biblioteca);
    debug!(rooms = hall.room_count(), depth = hall.depth(), "mansion built");
    hall
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::command::Direction::{self, Left as E, Right as D};

    #[test]
    fn has_fourteen_rooms() {
        let hall = build_mansion();
        assert_eq!(hall.room_count(), 14);
        assert_eq!(hall.depth(), 4);
    }

    #[test]
    fn names_are_unique() {
        let hall = build_mansion();
        let names: HashSet<_> = hall.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), hall.room_count());
    }

    #[test]
    fn every_room_at_its_position() {
        let hall = build_mansion();
        let expected: &[(&[Direction], &str)] = &[
            (&[], HALL),
            (&[E], COZINHA),
            (&[D], BIBLIOTECA),
            (&[E, E], DESPENSA),
            (&[E, D], SALA_DE_JANTAR),
            (&[D, E], ESCRITORIO),
            (&[D, D], QUARTO_PRINCIPAL),
            (&[E, D, E], JARDIM_DE_INVERNO),
            (&[E, D, D], COPA),
            (&[D, E, E], ARQUIVO_SECRETO),
            (&[D, E, D], CORREDOR_OESTE),
            (&[D, D, E], BANHEIRO_SUITE),
            (&[D, D, D], VARANDA),
            (&[D, E, D, D], QUARTO_DE_HOSPEDES),
        ];
        for (path, name) in expected {
            let room = hall
                .descend(path)
                .unwrap_or_else(|| panic!("no room at {path:?}"));
            assert_eq!(room.name(), *name, "room at {path:?}");
        }
        assert!(hall.descend(&[D, E, D, E]).is_none());
    }

    #[test]
    fn leaves() {
        let hall = build_mansion();
        let leaves: Vec<_> = hall
            .iter()
            .filter(|r| r.is_leaf())
            .map(|r| r.name())
            .collect();
        assert_eq!(
            leaves,
            [
                DESPENSA,
                JARDIM_DE_INVERNO,
                COPA,
                ARQUIVO_SECRETO,
                QUARTO_DE_HOSPEDES,
                BANHEIRO_SUITE,
                VARANDA,
            ]
        );
    }

    #[test]
    fn west_corridor_has_single_exit() {
        let hall = build_mansion();
        let corredor = hall.descend(&[D, E, D]).unwrap();
        assert_eq!(corredor.exits(), vec![D]);
    }
}
