//! The menu as an explicit state machine.
//!
//! `MenuWait` reads an option; options that need input move through
//! `AwaitField1` and, for create/update, `AwaitField2`, before an
//! [`Action`] is dispatched and the machine returns to `MenuWait`.

pub const MENU: &str = "
  == Neo4j CRUD ==
  1. Adicionar Usuário
  2. Ler Usuário
  3. Atualizar Usuário
  4. Excluir Usuário
  5. Exibir Todos os Usuários
  0. Sair
  
";

pub const SELECT_PROMPT: &str = "Selecione: ";
pub const NAME_PROMPT: &str = "Nome: ";
pub const AGE_PROMPT: &str = "Idade: ";
pub const NEW_AGE_PROMPT: &str = "Nova idade: ";
pub const INVALID_OPTION: &str = "Ação inválida.";

/// One HTTP call the menu wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create { name: String, age: String },
    Read { name: String },
    Update { name: String, age: String },
    Delete { name: String },
    List,
}

/// What the driver should do after feeding a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this prompt and read another line.
    Prompt(&'static str),
    Dispatch(Action),
    /// Unknown option; the menu is shown again.
    Invalid,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Create,
    Read,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    MenuWait,
    AwaitField1(Choice),
    AwaitField2(Choice, String),
}

#[derive(Debug)]
pub struct Menu {
    state: State,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    pub fn new() -> Self {
        Self {
            state: State::MenuWait,
        }
    }

    /// True while waiting for a menu option.
    pub fn at_menu(&self) -> bool {
        self.state == State::MenuWait
    }

    /// Feed one input line, without its line terminator.
    pub fn feed(&mut self, line: &str) -> Step {
        let state = std::mem::replace(&mut self.state, State::MenuWait);
        match state {
            State::MenuWait => self.select(line.trim()),
            State::AwaitField1(choice) => {
                let name = line.to_string();
                match choice {
                    Choice::Create => {
                        self.state = State::AwaitField2(choice, name);
                        Step::Prompt(AGE_PROMPT)
                    }
                    Choice::Update => {
                        self.state = State::AwaitField2(choice, name);
                        Step::Prompt(NEW_AGE_PROMPT)
                    }
                    Choice::Read => Step::Dispatch(Action::Read { name }),
                    Choice::Delete => Step::Dispatch(Action::Delete { name }),
                }
            }
            State::AwaitField2(choice, name) => {
                let age = line.to_string();
                match choice {
                    Choice::Update => Step::Dispatch(Action::Update { name, age }),
                    _ => Step::Dispatch(Action::Create { name, age }),
                }
            }
        }
    }

    fn select(&mut self, option: &str) -> Step {
        let choice = match option {
            "1" => Choice::Create,
            "2" => Choice::Read,
            "3" => Choice::Update,
            "4" => Choice::Delete,
            "5" => return Step::Dispatch(Action::List),
            "0" => return Step::Exit,
            _ => return Step::Invalid,
        };
        self.state = State::AwaitField1(choice);
        Step::Prompt(NAME_PROMPT)
    }
}
