mod password_flow;
