use std::collections::BTreeSet;

use super::domain::{ChecklistError, ItemId};

/// Storage key under which the answer state of this instrument is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "fcd-checklist-v1";

/// Publication the items, cutoffs and interpretive statements come from.
pub const SOURCE_CITATION: &str =
    "Cabreira et al., BMJ Neurology Open (2025), https://doi.org/10.1136/bmjno-2024-000918";

/// A single diagnostic question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub label: &'static str,
    /// Only asked in the full question set.
    pub only_full: bool,
    pub instruction: Option<&'static str>,
}

/// Ordered, immutable list of checklist items. Order is the on-screen enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// The validated 11-item instrument (7 items in the short version).
    pub fn standard() -> Self {
        Self {
            items: STANDARD_ITEMS.to_vec(),
        }
    }

    /// Builds a catalog from an arbitrary item list, rejecting zero and duplicate ids.
    pub fn from_items(items: Vec<Item>) -> Result<Self, ChecklistError> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if item.id.get() == 0 {
                return Err(ChecklistError::NonPositiveItemId(item.id));
            }
            if !seen.insert(item.id) {
                return Err(ChecklistError::DuplicateItemId(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// 1-based position of the item in catalog order.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .map(|index| index + 1)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const STANDARD_ITEMS: &[Item] = &[
    Item {
        id: ItemId(1),
        label: "Besteht eine Diskrepanz zwischen dem Ausmaß der berichteten Symptome und der Alltagsfunktion?",
        only_full: false,
        instruction: Some("Ein Nachweis interner Inkonsistenz liegt vor, wenn subjektiv berichtete erhebliche kognitive Schwierigkeiten und/oder niedrige neuropsychologische Testergebnisse in starkem Gegensatz stehen zu Beispielen wie:\n- der Fähigkeit, einen kognitiv anspruchsvollen Job ohne Schwierigkeiten auszuüben\n- im Gespräch beobachtbaren adäquaten sprachlich‑kommunikativen Fähigkeiten\n- der Fähigkeit, bestimmte Aktivitäten wie das Lesen eines Buches, das Verwalten von Finanzen und Autofahren ohne Schwierigkeiten auszuführen."),
    },
    Item {
        id: ItemId(2),
        label: "Kann die Patientin oder der Patient detaillierte Beispiele für seine/ihre Gedächtnisbeschwerden nennen?",
        only_full: false,
        instruction: Some("Während des Gesprächs nennt die Patientin oder der Patient konkrete Beispiele für Gedächtnisausfälle, oft mit detaillierten und über die erfragten Informationen hinausgehenden Angaben. Die berichteten Symptome liegen häufig im Bereich normaler menschlicher Erfahrungen. Im Gegensatz zu neurodegenerativen Erkrankungen können Betroffene mit einer funktionellen kognitiven Störung oft längere Zeit ununterbrochen berichten."),
    },
    Item {
        id: ItemId(3),
        label: "Sind die kognitiven Beschwerden ablenkbar und/oder fluktuierend (z.B. variabel in unterschiedlichen Situationen)?",
        only_full: true,
        instruction: Some("Bei Patientinnen oder Patienten mit funktioneller kognitiver Störung treten Schwierigkeiten häufig nur in bestimmten Situationen auf. Zum Beispiel können sie detailliert über Episoden von Gedächtnisverlust berichten und ihre Aufmerksamkeit während des Interviews aufrechterhalten, zeigen jedoch unverhältnismäßige Beeinträchtigungen derselben Funktionen in anderen Situationen (z. B. bei kognitiven Tests oder wenn die Aufmerksamkeit auf die Symptome gelenkt wird). Dies ist nicht dasselbe wie Fluktuationen im Zeitverlauf, die bei vielen anderen Erkrankungsprozessen beobachtet werden können (z. B. bei Delir oder Lewy‑Körper‑Demenz)."),
    },
    Item {
        id: ItemId(4),
        label: "Kann die Patientin oder der Patient die Liste der verordneten Medikamente nennen und/oder frühere Interaktionen mit anderen Ärzten erinnern (z.B. frühere Diagnosen und Untersuchungen)?",
        only_full: true,
        instruction: Some("Patientinnen und Patienten mit funktioneller kognitiver Störung sind häufig in der Lage, sich an frühere Interaktionen mit anderen Ärztinnen und Ärzten zu erinnern, einschließlich spezifischer Aspekte früherer Diagnosen und Untersuchungen. Ebenso deutet die Fähigkeit, eine Liste von Medikamenten aus dem Gedächtnis wiederzugeben und deren Indikationen zu benennen, auf ein gut funktionierendes Gedächtnis hin - was oftmals im Widerspruch zu den angegebenen Symptomen steht."),
    },
    Item {
        id: ItemId(5),
        label: "Gibt es eine Vorgeschichte einer nicht-kognitiven funktionellen neurologischen Störung und/oder funktionellen somatischen Störung (Schmerzen, Fatigue, …)?",
        only_full: false,
        instruction: Some("Das Vorliegen anderer Symptome wie chronische Schmerzen, Fatigue, Dissoziation oder das Vorliegen anderer funktioneller Diagnosen kann ein hilfreicher (aber nicht notwendiger) Hinweis auf eine funktionelle kognitive Störung sein."),
    },
    Item {
        id: ItemId(6),
        label: "Fallen dem Betroffenen die kognitiven Veränderung stärker auf als anderen (beachten Sie dafür auch z.B. selbst initiierte Überweisung und/oder alleinige Vorstellung)?",
        only_full: false,
        instruction: Some("Bei der funktionellen kognitiven Störung deutet die Fremdanamnese oft darauf hin, dass die Sorge von Betroffenen deutlich größer ist als die der Angehörigen. Unterstützende Hinweise zeigen sich darin, dass Patientinnen oder Patienten die Klinik allein aufsuchen und/oder die Überweisung selbst initiiert haben (d. h. Betroffene haben aufgrund ihrer Bedenken selbst die Initiative ergriffen, einen Arzt aufzusuchen)."),
    },
    Item {
        id: ItemId(7),
        label: "Ist die kognitive Leistung normal oder zeigt sie ein inkonsistentes Muster (z.B. schlechteres Ergebnis beim unmittelbaren Erinnern als beim verzögerten Abruf, bessere Leistung beim Rückwärtswiederholen von Ziffern als beim Vorwärtswiederholen, ungefähre Antworten)?",
        only_full: true,
        instruction: Some("Betroffene mit funktioneller kognitiver Störung können eine normale kognitive Leistung zeigen, im Vergleich zu neurodegenerativen Erkrankungen besser abschneiden oder auch unterdurchschnittliche Ergebnisse aufweisen. Wichtiger als eine „normale“ kognitive Leistung ist jedoch das Auftreten inkonsistenter Leistungsmuster, insbesondere im selben kognitiven Funktionsbereich (z. B. schlechtere Leistung bei der unmittelbaren Erinnerung im Vergleich zur verzögerten Erinnerung, bessere Leistung beim Rückwärtswiederholen von Ziffern im Vergleich zum Vorwärtswiederholen). Dies deutet darauf hin, dass kognitive Prozesse besser funktionieren, wenn sie automatisch abgerufen werden, als wenn sie explizit gefordert sind. Einige Betroffene zeigen möglicherweise auch eine geringe Ausdauer bei Aufgaben oder geben vage Antworten, die sich mit Ermutigung verbessern. Andere beeinflussende Faktoren, wie z. B. Schwankungen im Bewusstseinszustand, starke Kopfschmerzen oder andere akute neurologische oder psychiatrische Einflussfaktoren sollten ebenfalls berücksichtigt werden, da sie Aufmerksamkeitsdefizite erklären können."),
    },
    Item {
        id: ItemId(8),
        label: "Sind die Gedächtnissymptome im Verlauf stabil oder haben sich gebessert?",
        only_full: false,
        instruction: Some("Patientinnen und Patienten mit funktioneller kognitiver Störung können plötzlich und schwerwiegend auftretende Symptome präsentieren, die über die Zeit stabil bleiben. In anderen Fällen haben Betroffene, die sich wegen Gedächtnisproblemen vorstellen, eine lange Dauer der Symptome, die sich über die Zeit nicht verschlechtert oder aber verbessert haben. Es ist zu beachten, dass auch bei vaskulärer kognitiver Beeinträchtigung oder nach einem Schädel‑Hirn‑Trauma (SHT) stabile Symptome oder eine Verbesserung im Laufe der Zeit vorliegen kann, insbesondere bei der Behandlung von Begleiterkrankungen."),
    },
    Item {
        id: ItemId(9),
        label: "Kann die Patientin oder der Patient den Beginn der Symptome präzise datieren (abrupter Beginn)?",
        only_full: false,
        instruction: Some("Einige Patientinnen und Patienten können den Beginn der Symptome präzise beschreiben und datieren. Dabei werden häufig Zusammenhänge zu vorangegangenen spezifischen Ereignissen geschildert, beispielsweise eine Migräneattacke, ein Dissoziationserleben, ein leichtes Schädel‑Hirn‑Trauma oder eine Virus‑Infektion. Diese Information sollte von Betroffenen selbst und nicht von den Angehörigen hervorgebracht werden."),
    },
    Item {
        id: ItemId(10),
        label: "Gibt es einen offensichtlichen psychologischen Stressor?",
        only_full: false,
        instruction: Some("Psychologische Stressfaktoren können als prädisponierende, auslösende oder aufrechterhaltende Faktoren bei einer funktionellen kognitiven Störung wirken. Bei einem Teil der Betroffenen ist die funktionelle kognitive Störung mit depressiven Symptomen, Angstzuständen und anderen stressbezogenen Lebensereignissen verbunden. Bei einigen Betroffenen können Gedächtnissymptome mit bedeutenden Lebensereignissen wie einem kürzlichen Trauerfall oder einer körperlichen Erkrankung in Verbindung stehen. "),
    },
    Item {
        id: ItemId(11),
        label: "Kann die Patientin oder der Patient zusammengesetzte/mehrteilige Fragen beantworten?",
        only_full: true,
        instruction: Some("Es findet sich häufig eine Inkonsistenz zwischen der erhaltenen Fähigkeit, die Einzelteile einer längeren und zusammengesetzten Frage beantworten zu können, und den Gedächtnisbeschwerden der Betroffenen. Das heißt, die Fähigkeit mehrteilige Fragen zu beantworten steht nicht im Einklang mit der Schwere der berichteten Symptome. Im Allgemeinen können Betroffene mit leichter kognitiver Beeinträchtigung (MCI) bei Neurodegeneration zwar in der Lage sein, solche Fragen zu beantworten (insbesondere wenn sie hochgebildet sind); dies sollte jedoch nicht isoliert betrachtet werden - in der Regel stimmt dies bei MCI Patientinnen und Patienten mit ihren milden Symptomen überein."),
    },
];
